// Persisted records
pub mod user;

pub use user::{DEMO_EMAIL, NewUser, UserRecord};
