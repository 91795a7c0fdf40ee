use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Response model for the account store diagnostics endpoint
#[derive(Object, Debug)]
pub struct DiagnosticsResponse {
    /// "success" when the demo account is present, "error" otherwise
    pub status: String,

    /// Which user store backs the service ("memory" or "file")
    pub user_store: String,

    pub demo_user_exists: bool,

    pub total_users: u64,
}

/// Standardized error response model
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code,
        }
    }

    /// 400 body for requests the extractors could not parse
    pub fn invalid_request() -> Self {
        Self::new("invalid_request", "Invalid request data", 400)
    }
}
