use crate::errors::internal::{CredentialError, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Account error types
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "auth_bad_request")]
pub enum AuthError {
    /// Body missing, not JSON, or the wrong shape
    #[oai(status = 400)]
    InvalidRequest(Json<ErrorResponse>),

    /// Invalid email or password
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Required fields are missing or blank
    #[oai(status = 400)]
    MissingFields(Json<ErrorResponse>),

    /// Email address is malformed
    #[oai(status = 400)]
    InvalidEmail(Json<ErrorResponse>),

    /// Password does not meet the length requirement
    #[oai(status = 400)]
    PasswordTooShort(Json<ErrorResponse>),

    /// Email already belongs to an account
    #[oai(status = 400)]
    DuplicateEmail(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Replaces poem-openapi's plain-text extractor errors with the JSON error body
fn auth_bad_request(err: poem::Error) -> AuthError {
    tracing::debug!("Rejected account request: {}", err);
    AuthError::invalid_request()
}

impl AuthError {
    /// Create an InvalidRequest error
    pub fn invalid_request() -> Self {
        AuthError::InvalidRequest(Json(ErrorResponse::invalid_request()))
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(ErrorResponse::new(
            "invalid_credentials",
            "Invalid email or password",
            401,
        )))
    }

    /// Create a MissingFields error
    pub fn missing_fields(message: impl Into<String>) -> Self {
        AuthError::MissingFields(Json(ErrorResponse::new("missing_fields", message, 400)))
    }

    /// Create an InvalidEmail error
    pub fn invalid_email() -> Self {
        AuthError::InvalidEmail(Json(ErrorResponse::new(
            "invalid_email",
            "Invalid email format",
            400,
        )))
    }

    /// Create a PasswordTooShort error
    pub fn password_too_short(min_length: usize) -> Self {
        AuthError::PasswordTooShort(Json(ErrorResponse::new(
            "password_too_short",
            format!("Password must be at least {} characters", min_length),
            400,
        )))
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email() -> Self {
        AuthError::DuplicateEmail(Json(ErrorResponse::new(
            "duplicate_email",
            "Email already registered",
            400,
        )))
    }

    /// Convert InternalError to AuthError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Credential(CredentialError::InvalidCredentials) => {
                Self::invalid_credentials()
            }
            InternalError::Credential(CredentialError::MissingFields(fields)) => {
                tracing::debug!("Registration missing fields: {:?}", fields);
                Self::missing_fields("All fields are required")
            }
            InternalError::Credential(CredentialError::MissingCredentials) => {
                Self::missing_fields("Email and password are required")
            }
            InternalError::Credential(CredentialError::InvalidEmail(email)) => {
                tracing::debug!("Invalid email format: {}", email);
                Self::invalid_email()
            }
            InternalError::Credential(CredentialError::PasswordTooShort { min_length }) => {
                Self::password_too_short(*min_length)
            }
            InternalError::Credential(CredentialError::DuplicateEmail(email)) => {
                tracing::warn!("Duplicate email registration attempt: {}", email);
                Self::duplicate_email()
            }
            InternalError::Storage(_) | InternalError::Catalog(_) => {
                tracing::error!("Unexpected error in account operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Generic 500 that never exposes internal details
    fn internal_server_error() -> Self {
        AuthError::InternalError(Json(ErrorResponse::new(
            "internal_error",
            "An internal error occurred",
            500,
        )))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidRequest(json) => json.0.message.clone(),
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::MissingFields(json) => json.0.message.clone(),
            AuthError::InvalidEmail(json) => json.0.message.clone(),
            AuthError::PasswordTooShort(json) => json.0.message.clone(),
            AuthError::DuplicateEmail(json) => json.0.message.clone(),
            AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for AuthError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
