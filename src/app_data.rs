use std::sync::Arc;

use crate::config::{BootstrapSettings, UserStoreKind};
use crate::errors::InternalError;
use crate::services::AccountService;
use crate::stores::{CatalogStore, FileUserStore, MemoryUserStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once in main.rs and handed to the API structs by
/// `Arc`; there is no module-level state.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(&settings)
///   ├─ catalog (Arc<CatalogStore>)          seed or CATALOG_FILE
///   ├─ user_store (Arc<dyn UserStore>)      memory or file, per USER_STORE
///   └─ account_service (Arc<AccountService>)
///   ↓
/// api::build_app(app_data)
/// ```
pub struct AppData {
    pub catalog: Arc<CatalogStore>,
    pub user_store: Arc<dyn UserStore>,
    pub account_service: Arc<AccountService>,
}

impl AppData {
    /// Initialize all application data from bootstrap settings
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the catalog fails validation or the users
    /// file cannot be read or created.
    pub async fn init(settings: &BootstrapSettings) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        let catalog = match settings.catalog_file() {
            Some(path) => CatalogStore::load(path)?,
            None => CatalogStore::seeded()?,
        };
        tracing::debug!("Catalog ready with {} items", catalog.items().len());

        let user_store: Arc<dyn UserStore> = match settings.user_store() {
            UserStoreKind::Memory => Arc::new(MemoryUserStore::new()),
            UserStoreKind::File => Arc::new(FileUserStore::open(settings.users_file()).await?),
        };
        tracing::info!("Using {} user store", user_store.backend());

        Ok(Self::new(catalog, user_store))
    }

    pub fn new(catalog: CatalogStore, user_store: Arc<dyn UserStore>) -> Self {
        let account_service = Arc::new(AccountService::new(user_store.clone()));

        Self {
            catalog: Arc::new(catalog),
            user_store,
            account_service,
        }
    }
}
