use thiserror::Error;

/// Catalog load and lookup errors
///
/// Everything except `ItemNotFound` is raised while the catalog is loaded,
/// never while it is queried.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed catalog document: {0}")]
    Malformed(String),

    #[error("Invalid item {id}: {reason}")]
    InvalidItem { id: u64, reason: String },

    #[error("Duplicate item id: {0}")]
    DuplicateItemId(u64),

    #[error("Item not found: {0}")]
    ItemNotFound(u64),
}

impl CatalogError {
    pub fn invalid_item(id: u64, reason: impl Into<String>) -> Self {
        Self::InvalidItem {
            id,
            reason: reason.into(),
        }
    }
}
