#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    let config = ServerConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;
    let app = routes::app(&config).inspect_err(|e| tracing::error!(error = %e, "router init failed"))?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, api_url = %config.api_url, "ipce listening");
    axum::serve(listener, app).await?;
    Ok(())
}
