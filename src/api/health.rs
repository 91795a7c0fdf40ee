use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{OpenApi, Tags, payload::Json};

use crate::errors::AuthError;
use crate::services::AccountService;
use crate::types::dto::common::{DiagnosticsResponse, HealthResponse};

/// Health check and diagnostics API
pub struct HealthApi {
    account_service: Arc<AccountService>,
}

impl HealthApi {
    pub fn new(account_service: Arc<AccountService>) -> Self {
        Self { account_service }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Reports that the service is up, with the current server time
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }

    /// User store diagnostics
    ///
    /// Checks that the demo account is present and counts stored accounts
    #[oai(path = "/test", method = "get", tag = "ApiTags::Health")]
    async fn diagnostics(&self) -> Result<Json<DiagnosticsResponse>, AuthError> {
        let status = self.account_service.store_status().await?;

        Ok(Json(DiagnosticsResponse {
            status: if status.demo_user_exists { "success" } else { "error" }.to_string(),
            user_store: status.backend.to_string(),
            demo_user_exists: status.demo_user_exists,
            total_users: status.total_users as u64,
        }))
    }
}
