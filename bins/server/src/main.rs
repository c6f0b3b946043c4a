//! Sitebook API Server
//!
//! Main entry point for the construction projects and expenses service.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitebook_api::{AppState, create_router};
use sitebook_core::storage::{StorageConfig, StorageService};
use sitebook_db::connect;
use sitebook_shared::{AppConfig, IdGenerator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Connection settings live in .env; refuse to start without it
    dotenvy::dotenv().context("Failed to load .env file")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitebook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!(
        host = %config.database.host,
        database = %config.database.name,
        "Connected to database"
    );

    // Receipt storage
    let storage = StorageService::from_config(StorageConfig::from(&config.storage))
        .context("Failed to configure receipt storage")?;
    info!(
        provider = storage.provider_name(),
        bucket = %config.storage.bucket,
        "Receipt storage configured"
    );

    let ids = IdGenerator::new(config.ids.strategy);
    info!(strategy = ?ids.strategy(), "Identifier generator ready");

    // Create application state
    let state = AppState::new(db, storage, ids);

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves once Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
