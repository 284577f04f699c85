//! Respira+ API Server

use std::sync::Arc;
use tracing::info;

mod app;
mod error;
mod routes;
mod state;


use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api=debug".parse()?)
                .add_directive("footprint=info".parse()?)
                .add_directive("store=info".parse()?),
        )
        .init();

    info!("🌱 Starting Respira+ API");

    let config = common::Config::from_env();
    let addr = format!("{}:{}", config.host, config.port);

    let state = Arc::new(AppState::new(config));
    let app = app::router(state);

    info!("🚀 Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
