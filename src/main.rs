//! Redis Greeter - a minimal HTTP service backed by Redis
//!
//! Greets on `GET /` with the value cached under the demo key.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redis_greeter::api::{create_router, AppState};
use redis_greeter::config::Config;
use redis_greeter::startup::{connect_redis, initialize_store};
use redis_greeter::tasks::spawn_reconnect_task;

/// Main entry point for the greeter service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to Redis and seed the demo key (a failed connection is logged, not fatal)
/// 4. Start the reconnect task if configured and still disconnected
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redis_greeter=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, redis={}, seed_on_startup={}, request_timeout={}ms",
        config.server_port,
        config.redis_url(),
        config.seed_on_startup,
        config.request_timeout.as_millis()
    );

    let store = initialize_store(&config).await;

    let connected = store.is_available().await;
    let reconnect_handle = match config.reconnect_interval {
        Some(interval) if !connected => {
            let task_config = config.clone();
            Some(spawn_reconnect_task(
                store.clone(),
                interval,
                config.seed_on_startup,
                move || {
                    let config = task_config.clone();
                    async move { connect_redis(&config).await }
                },
            ))
        }
        _ => None,
    };

    let app = create_router(AppState::from_config(&config, store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("🚀 Server running on port {}", config.server_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(reconnect_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the reconnect task if one is running.
async fn shutdown_signal(reconnect_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
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

    if let Some(handle) = reconnect_handle {
        handle.abort();
        warn!("Reconnect task aborted");
    }
}
