use thiserror::Error;

pub mod catalog;
pub mod credential;
pub mod storage;

pub use catalog::CatalogError;
pub use credential::CredentialError;
pub use storage::StorageError;

/// Internal error type for store and service operations
///
/// Storage errors are shared; domain errors (Catalog,
/// Credential) belong to one store each.
/// Not exposed via API - endpoints must convert to AuthError or CatalogApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl InternalError {
    pub fn io(operation: &str, source: std::io::Error) -> Self {
        InternalError::Storage(StorageError::Io {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn serialization(operation: &str, source: serde_json::Error) -> Self {
        InternalError::Storage(StorageError::Serialization {
            operation: operation.to_string(),
            source,
        })
    }
}
