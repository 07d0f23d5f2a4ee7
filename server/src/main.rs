mod api;
mod app;
mod auth;
mod config;
mod db;
mod models;
mod schema;
mod scraping;
mod state;
mod telemetry;

use anyhow::Context;
use config::ServerConfig;
use pantry_core::Scraper;
use state::AppState;
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json()?;
        println!("{}", spec);
        return Ok(());
    }

    telemetry::init_telemetry()?;

    let config = ServerConfig::from_env()?;

    let state = AppState {
        pool: Arc::new(db::create_pool(&config.database_url)?),
        scraper: Arc::new(Scraper::with_defaults().context("Failed to build HTTP client")?),
    };

    let app = app::build_app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);
    tracing::info!("OpenAPI spec available at http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
