// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use poem::test::TestClient;
use poem::{Response, endpoint::BoxEndpoint};

use wearhouse_backend::api::build_app;
use wearhouse_backend::app_data::AppData;
use wearhouse_backend::stores::{CatalogStore, MemoryUserStore, UserStore};
use wearhouse_backend::types::dto::items::{Category, Item, ItemOwner};

pub type TestApp = TestClient<BoxEndpoint<'static, Response>>;

/// Builds a catalog item with predictable filler values
pub fn make_item(id: u64, title: &str, category: &str, size: &str, city: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: format!("Description of {}", title),
        price_per_day: 500.0 + id as f64,
        size: size.to_string(),
        category: category.to_string(),
        image_url: None,
        owner: ItemOwner {
            name: format!("Owner {}", id),
            city: city.to_string(),
            rating: 4.0,
        },
        is_available: true,
        date_added: "2024-02-01".to_string(),
    }
}

/// 30 items: ids 1-18 are Dresses, 19-30 are Suits; odd ids live in Mumbai,
/// even ids in Pune; every third id is size L, the rest M
pub fn large_catalog() -> CatalogStore {
    let items = (1..=30)
        .map(|id| {
            let category = if id <= 18 { "Dresses" } else { "Suits" };
            let city = if id % 2 == 1 { "Mumbai" } else { "Pune" };
            let size = if id % 3 == 0 { "L" } else { "M" };
            make_item(id, &format!("{} #{}", category, id), category, size, city)
        })
        .collect();

    let categories = vec![Category {
        id: 1,
        name: "Party Wear".to_string(),
        slug: "party".to_string(),
        icon: "🎉".to_string(),
    }];

    CatalogStore::new(items, categories).expect("Failed to build test catalog")
}

/// Client over the shipped seed catalog and a fresh in-memory user store
pub fn seeded_client() -> TestApp {
    let catalog = CatalogStore::seeded().expect("Failed to load seed catalog");
    client_for(catalog, Arc::new(MemoryUserStore::new()))
}

pub fn client_for(catalog: CatalogStore, user_store: Arc<dyn UserStore>) -> TestApp {
    let app_data = AppData::new(catalog, user_store);
    TestClient::new(build_app(&app_data, "http://localhost:3000/api"))
}
