// API layer - HTTP endpoints
pub mod auth;
pub mod health;
pub mod items;

use std::sync::Arc;

use poem::{EndpointExt, Response, Route, endpoint::BoxEndpoint, middleware::Cors};
use poem_openapi::OpenApiService;

pub use auth::AuthApi;
pub use health::HealthApi;
pub use items::ItemsApi;

use crate::app_data::AppData;

/// Compose the application: OpenAPI service under `/api`, Swagger UI under
/// `/swagger`, permissive CORS on everything
///
/// `server_url` is only advertised in the generated OpenAPI document.
pub fn build_app(app_data: &AppData, server_url: &str) -> BoxEndpoint<'static, Response> {
    let api_service = OpenApiService::new(
        (
            HealthApi::new(app_data.account_service.clone()),
            ItemsApi::new(app_data.catalog.clone()),
            AuthApi::new(app_data.account_service.clone()),
        ),
        "WearHouse API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .with(Cors::new())
        .map_to_response()
        .boxed()
}
