use poem_openapi::{ApiResponse, Object, payload::Json};
use serde::{Deserialize, Serialize};

/// Request model for account registration
///
/// Every field defaults to empty so that missing fields reach the account
/// service and are reported as a single validation error.
#[derive(Object, Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Full name
    #[oai(default)]
    #[serde(default)]
    pub name: String,

    /// Email address, used as the login identifier
    #[oai(default)]
    #[serde(default)]
    pub email: String,

    /// Password (at least 6 characters)
    #[oai(default)]
    #[serde(default)]
    pub password: String,

    /// Phone number
    #[oai(default)]
    #[serde(default)]
    pub phone: String,

    /// City of residence
    #[oai(default)]
    #[serde(default)]
    pub city: String,

    /// Optional street address
    #[oai(default)]
    #[serde(default)]
    pub address: String,
}

/// Request model for user login
#[derive(Object, Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address
    #[oai(default)]
    #[serde(default)]
    pub email: String,

    /// Password
    #[oai(default)]
    #[serde(default)]
    pub password: String,
}

/// Public view of an account. Never carries the password.
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub rating: f64,
    pub reviews_count: u32,
}

/// Response model for register and login
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Outcome message
    pub message: String,

    /// The authenticated or newly created account
    pub user: UserProfile,
}

/// API response for register endpoint
#[derive(ApiResponse)]
pub enum RegisterApiResponse {
    /// Account created
    #[oai(status = 201)]
    Created(Json<AccountResponse>),
}
