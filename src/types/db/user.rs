use serde::{Deserialize, Serialize};

use crate::types::dto::auth::UserProfile;

/// Email of the account every fresh store is seeded with
pub const DEMO_EMAIL: &str = "demo@wearhouse.com";

/// Persisted account record, as held by every `UserStore` variant
///
/// The password is kept and compared as plain text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews_count: u32,
}

/// Validated input for a new account; the store assigns the id
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub city: String,
    pub address: String,
}

impl UserRecord {
    pub fn from_new(id: u64, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            password: new_user.password,
            phone: new_user.phone,
            city: new_user.city,
            address: new_user.address,
            rating: 0.0,
            reviews_count: 0,
        }
    }

    /// Account every fresh store starts with
    pub fn demo() -> Self {
        Self {
            id: 1,
            name: "Demo User".to_string(),
            email: DEMO_EMAIL.to_string(),
            password: "password123".to_string(),
            phone: "+91 9876543210".to_string(),
            city: "Mumbai".to_string(),
            address: "123 Fashion Street, Mumbai".to_string(),
            rating: 5.0,
            reviews_count: 10,
        }
    }
}

impl From<&UserRecord> for UserProfile {
    fn from(u: &UserRecord) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            phone: u.phone.clone(),
            city: u.city.clone(),
            address: u.address.clone(),
            rating: u.rating,
            reviews_count: u.reviews_count,
        }
    }
}
