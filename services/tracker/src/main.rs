use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tracker::{AppState, config::AppConfig, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracker=info,exercise_tracker=info,tower_http=info".into()),
        )
        .init();

    info!("Starting exercise tracker");

    let config = AppConfig::load()?;
    let addr = config.listen_addr()?;

    let app_state = AppState::connect(config.store_backend).await?;
    info!(
        "Exercise tracker initialized with {} store",
        config.store_backend.as_str()
    );

    // Start the web server
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Exercise tracker listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutting down exercise tracker");
        })
        .await?;

    Ok(())
}
