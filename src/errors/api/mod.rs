// API-facing error types
pub mod auth;
pub mod catalog;


// Re-exports for convenience
pub use auth::AuthError;
pub use catalog::CatalogApiError;
