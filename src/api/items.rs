use std::sync::Arc;

use poem_openapi::{
    OpenApi, Tags,
    param::{Path, Query},
    payload::Json,
};

use crate::errors::CatalogApiError;
use crate::stores::CatalogStore;
use crate::types::dto::items::{Category, Item, ItemPage};
use crate::types::internal::ItemQuery;

/// Catalog API
pub struct ItemsApi {
    catalog: Arc<CatalogStore>,
}

impl ItemsApi {
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self { catalog }
    }
}

/// API tags for catalog endpoints
#[derive(Tags)]
enum ApiTags {
    /// Rental item catalog
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List catalog items
    ///
    /// All parameters are optional and accepted as raw strings. Unusable
    /// `page`/`per_page` values fall back to 1 and 12; `per_page` is capped at 100.
    /// `min_price`/`max_price` are inclusive bounds on the daily price and are
    /// ignored unless they parse as numbers.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(
        &self,
        page: Query<Option<String>>,
        per_page: Query<Option<String>>,
        category: Query<Option<String>>,
        size: Query<Option<String>>,
        city: Query<Option<String>>,
        search: Query<Option<String>>,
        min_price: Query<Option<String>>,
        max_price: Query<Option<String>>,
    ) -> Json<ItemPage> {
        let params = ItemQuery {
            page: page.0,
            per_page: per_page.0,
            category: category.0,
            size: size.0,
            city: city.0,
            search: search.0,
            min_price: min_price.0,
            max_price: max_price.0,
        };

        Json(self.catalog.query(&params))
    }

    /// Get a single item by id
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<u64>) -> Result<Json<Item>, CatalogApiError> {
        let item = self
            .catalog
            .find_item(id.0)
            .map_err(CatalogApiError::from_internal_error)?;

        Ok(Json(item.clone()))
    }

    /// List catalog categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Items")]
    async fn list_categories(&self) -> Json<Vec<Category>> {
        Json(self.catalog.categories().to_vec())
    }
}
