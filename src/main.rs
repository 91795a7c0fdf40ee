use poem::{Server, listener::TcpListener};

use wearhouse_backend::api::build_app;
use wearhouse_backend::app_data::AppData;
use wearhouse_backend::config::{BootstrapSettings, init_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Bootstrap settings: {:?}", settings);

    let app_data = AppData::init(&settings).await?;

    let address = settings.server_address();
    let public_url = format!("http://localhost:{}", settings.server_port());
    let app = build_app(&app_data, &format!("{}/api", public_url));

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at {}/swagger", public_url);
    tracing::info!("API endpoints available at {}/api", public_url);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
