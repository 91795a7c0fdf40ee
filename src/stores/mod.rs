// Stores layer - Data access
pub mod catalog_store;
pub mod file_user_store;
pub mod user_store;

pub use catalog_store::CatalogStore;
pub use file_user_store::FileUserStore;
pub use user_store::{MemoryUserStore, UserStore};
