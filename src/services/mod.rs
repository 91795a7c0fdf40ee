// Services layer - Business logic
pub mod account_service;
pub mod catalog_query;


pub use account_service::AccountService;
