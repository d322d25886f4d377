//! Trialyx API server
//!
//! Run with: cargo run -p trialyx-web

use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = trialyx_web::config::Config::load()?;
    info!(mode = %config.registry.mode, "Starting Trialyx API server");

    let state = trialyx_web::state::AppState::from_config(&config)?;
    let app = trialyx_web::router::build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
