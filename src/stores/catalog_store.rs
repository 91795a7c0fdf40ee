use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::errors::InternalError;
use crate::errors::internal::CatalogError;
use crate::services::catalog_query;
use crate::types::dto::items::{Category, Item, ItemPage};
use crate::types::internal::ItemQuery;

/// Catalog shipped with the binary
const SEED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<Category>,
    items: Vec<Item>,
}

/// Read-only owner of the catalog snapshot
///
/// Items are validated once at load time and never change afterwards, so the
/// store is shared behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    items: Vec<Item>,
    categories: Vec<Category>,
}

impl CatalogStore {
    /// Catalog embedded at build time
    pub fn seeded() -> Result<Self, InternalError> {
        Self::from_json(SEED_CATALOG)
    }

    /// Load a catalog document from disk
    pub fn load(path: &Path) -> Result<Self, InternalError> {
        let raw = std::fs::read_to_string(path).map_err(|e| InternalError::io("read_catalog_file", e))?;
        let store = Self::from_json(&raw)?;
        tracing::info!("Loaded {} catalog items from {}", store.items.len(), path.display());
        Ok(store)
    }

    /// Parse and validate a `{ "categories": [...], "items": [...] }` document
    pub fn from_json(raw: &str) -> Result<Self, InternalError> {
        let document: CatalogDocument =
            serde_json::from_str(raw).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::new(document.items, document.categories)
    }

    /// Build a store from already-parsed records, validating every item
    pub fn new(items: Vec<Item>, categories: Vec<Category>) -> Result<Self, InternalError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            validate_item(item)?;
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateItemId(item.id).into());
            }
        }

        Ok(Self { items, categories })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find_item(&self, id: u64) -> Result<&Item, InternalError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| CatalogError::ItemNotFound(id).into())
    }

    /// Filtered, paginated view of the catalog
    pub fn query(&self, params: &ItemQuery) -> ItemPage {
        catalog_query::query(&self.items, params)
    }
}

fn validate_item(item: &Item) -> Result<(), CatalogError> {
    if item.id == 0 {
        return Err(CatalogError::invalid_item(item.id, "id must be a positive integer"));
    }
    if !item.price_per_day.is_finite() || item.price_per_day < 0.0 {
        return Err(CatalogError::invalid_item(
            item.id,
            "price_per_day must be a non-negative number",
        ));
    }
    Ok(())
}
