use crate::errors::internal::{CatalogError, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

/// Catalog error types
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "catalog_bad_request")]
pub enum CatalogApiError {
    /// Path parameter is not a valid item id
    #[oai(status = 400)]
    InvalidRequest(Json<ErrorResponse>),

    /// No item with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

fn catalog_bad_request(err: poem::Error) -> CatalogApiError {
    tracing::debug!("Rejected catalog request: {}", err);
    CatalogApiError::InvalidRequest(Json(ErrorResponse::invalid_request()))
}

impl CatalogApiError {
    pub fn not_found(id: u64) -> Self {
        CatalogApiError::NotFound(Json(ErrorResponse::new(
            "item_not_found",
            format!("Item {} not found", id),
            404,
        )))
    }

    /// Convert InternalError to CatalogApiError, logging anything unexpected
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Catalog(CatalogError::ItemNotFound(id)) => Self::not_found(*id),
            _ => {
                tracing::error!("Unexpected error in catalog operation: {}", err);
                CatalogApiError::InternalError(Json(ErrorResponse::new(
                    "internal_error",
                    "Failed to fetch items",
                    500,
                )))
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            CatalogApiError::InvalidRequest(json) => json.0.message.clone(),
            CatalogApiError::NotFound(json) => json.0.message.clone(),
            CatalogApiError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for CatalogApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for CatalogApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
