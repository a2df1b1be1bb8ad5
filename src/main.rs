//! Item Service - item CRUD over Postgres with a Redis read-through cache

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::info;

use item_service::{bootstrap, create_router, telemetry, Config};

/// Main entry point for the item service.
///
/// # Startup Sequence
/// 1. Load `.env` (if present) and configuration from environment variables
/// 2. Initialize tracing (stdout, plus rotated file when `LOG_DIR` is set)
/// 3. Connect to Postgres, create the `items` table, build the Redis pool
/// 4. Start HTTP server on configured port
/// 5. Handle graceful shutdown on SIGINT/SIGTERM and close the database pool
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    let _log_guard = telemetry::init(config.log_dir.as_deref())?;
    info!("Starting Item Service");

    let app = bootstrap::build(&config).await?;
    let router = create_router(app.state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    app.db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
