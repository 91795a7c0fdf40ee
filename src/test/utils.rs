// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use crate::services::AccountService;
use crate::stores::{MemoryUserStore, UserStore};
use crate::types::dto::items::{Item, ItemOwner};

/// Builds a catalog item with the fields the query engine looks at
///
/// Everything else gets a fixed filler value.
pub fn sample_item(id: u64, title: &str, description: &str, category: &str, size: &str, city: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        description: description.to_string(),
        price_per_day: 1000.0,
        size: size.to_string(),
        category: category.to_string(),
        image_url: None,
        owner: ItemOwner {
            name: format!("Owner {}", id),
            city: city.to_string(),
            rating: 4.5,
        },
        is_available: true,
        date_added: "2024-01-01".to_string(),
    }
}

/// 20 items: ids 1..=15 are "Dresses", 16..=20 are "Jackets"
///
/// Item 3 mentions silk in its title, item 17 in its description.
pub fn dresses_catalog() -> Vec<Item> {
    (1..=20)
        .map(|id| {
            let (category, title, description) = match id {
                3 => ("Dresses", "Silk Evening Dress".to_string(), "Floor length".to_string()),
                17 => ("Jackets", "Bomber Jacket".to_string(), "Lined with SILK".to_string()),
                1..=15 => ("Dresses", format!("Dress {}", id), "Cotton blend".to_string()),
                _ => ("Jackets", format!("Jacket {}", id), "Wool".to_string()),
            };
            let city = if id % 2 == 0 { "Mumbai" } else { "New Delhi" };
            let size = if id % 5 == 0 { "One Size" } else { "M" };
            sample_item(id, &title, &description, category, size, city)
        })
        .collect()
}

/// Account service over a fresh in-memory store seeded with the demo account
pub fn setup_test_account_service() -> (Arc<dyn UserStore>, AccountService) {
    let user_store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    let account_service = AccountService::new(user_store.clone());
    (user_store, account_service)
}
