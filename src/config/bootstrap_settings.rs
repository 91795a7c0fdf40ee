use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;

/// Which `UserStore` variant to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStoreKind {
    Memory,
    File,
}

impl FromStr for UserStoreKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => Err(format!("Unknown user store '{}'. Expected 'memory' or 'file'", other)),
        }
    }
}

impl fmt::Display for UserStoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Startup settings: listener address, user store selection, data files
pub struct BootstrapSettings {
    server_host: String,
    server_port: u16,
    user_store: UserStoreKind,
    users_file: PathBuf,
    catalog_file: Option<PathBuf>,
}

impl BootstrapSettings {
    /// Load bootstrap settings from the given environment provider
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let user_store_spec = ConfigSpec::new(env_provider.clone())
            .env_override("USER_STORE")
            .default_value("memory")
            .validator(|value| value.parse::<UserStoreKind>().map(|_| ()));

        let users_file_spec = ConfigSpec::new(env_provider.clone())
            .env_override("USERS_FILE")
            .default_value("users.json")
            .min_length(1);

        let catalog_file_spec = ConfigSpec::new(env_provider).env_override("CATALOG_FILE");

        let server_host = host_spec.load_setting_with_source()?.value.trim().to_string();

        let port_value = port_spec.load_setting_with_source()?.value;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        let user_store = user_store_spec
            .load_setting_with_source()?
            .value
            .parse::<UserStoreKind>()
            .map_err(|error| ApplicationError::ParseError {
                setting_name: "USER_STORE".to_string(),
                error,
            })?;

        let users_file = PathBuf::from(users_file_spec.load_setting_with_source()?.value);
        let catalog_file = catalog_file_spec.load_optional()?.map(PathBuf::from);

        Ok(Self {
            server_host,
            server_port,
            user_store,
            users_file,
            catalog_file,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn user_store(&self) -> UserStoreKind {
        self.user_store
    }

    pub fn users_file(&self) -> &Path {
        &self.users_file
    }

    pub fn catalog_file(&self) -> Option<&Path> {
        self.catalog_file.as_deref()
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("user_store", &self.user_store)
            .field("users_file", &self.users_file)
            .field("catalog_file", &self.catalog_file)
            .finish()
    }
}
