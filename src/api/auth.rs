use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::errors::AuthError;
use crate::services::AccountService;
use crate::types::dto::auth::{
    AccountResponse, LoginRequest, RegisterApiResponse, RegisterRequest, UserProfile,
};

/// Account API endpoints
pub struct AuthApi {
    account_service: Arc<AccountService>,
}

impl AuthApi {
    /// Create a new AuthApi backed by the given AccountService
    pub fn new(account_service: Arc<AccountService>) -> Self {
        Self { account_service }
    }
}

/// API tags for account endpoints
#[derive(Tags)]
enum AuthTags {
    /// Registration and login
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Register a new account
    ///
    /// Name, email, password, phone and city are required. The password is
    /// never echoed back.
    #[oai(path = "/register", method = "post", tag = "AuthTags::Authentication")]
    async fn register(&self, body: Json<RegisterRequest>) -> Result<RegisterApiResponse, AuthError> {
        let user = self.account_service.register(body.0).await?;

        Ok(RegisterApiResponse::Created(Json(AccountResponse {
            message: "Registration successful".to_string(),
            user: UserProfile::from(&user),
        })))
    }

    /// Login with email and password
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<AccountResponse>, AuthError> {
        let user = self.account_service.login(body.0).await?;

        Ok(Json(AccountResponse {
            message: "Login successful".to_string(),
            user: UserProfile::from(&user),
        }))
    }
}
