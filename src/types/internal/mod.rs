// Internal types that never cross the API boundary as-is
pub mod item_query;

pub use item_query::ItemQuery;
