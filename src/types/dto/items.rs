use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Owner of a rental item, embedded in every item record
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOwner {
    /// Display name of the owner
    pub name: String,

    /// City the item is rented from
    pub city: String,

    /// Average owner rating
    pub rating: f64,
}

/// Response model representing a catalog item
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item
    pub id: u64,

    /// Short title of the item
    pub title: String,

    /// Free-text description of the item
    pub description: String,

    /// Rental price per day
    pub price_per_day: f64,

    /// Size label ("M", "32", "One Size", ...)
    pub size: String,

    /// Category name
    pub category: String,

    /// Optional image URL
    #[serde(default)]
    pub image_url: Option<String>,

    /// Owner information
    pub owner: ItemOwner,

    /// Whether the item can currently be rented
    pub is_available: bool,

    /// Date the item was listed (YYYY-MM-DD)
    pub date_added: String,
}

/// Response model representing a catalog category
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub icon: String,
}

/// Pagination metadata returned alongside an item listing
#[derive(Object, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Requested page (1-based)
    pub page: u64,

    /// Total number of pages for the filtered result
    pub pages: u64,

    /// Page size actually applied
    pub per_page: u64,

    /// Number of items matching the filters
    pub total: u64,

    /// Whether a later page exists
    pub has_next: bool,

    /// Whether the requested page is past the first one
    pub has_prev: bool,
}

/// Response model for the item listing endpoint
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPage {
    /// Items on the requested page, in catalog order
    pub items: Vec<Item>,

    /// Pagination metadata
    pub pagination: Pagination,
}
