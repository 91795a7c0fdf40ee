use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage error: {operation} failed: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {operation} failed: {source}")]
    Serialization {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}
