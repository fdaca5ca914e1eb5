//! Airport Admin - an administration backend for airport operations.
//!
//! # API Endpoints
//!
//! - `GET /` - Service identity
//! - `/api/flights`, `/api/airlines` - Full CRUD
//! - `/api/passengers`, `/api/gates`, `/api/staff`, `/api/baggage`,
//!   `/api/maintenance`, `/api/security/alerts` - List, get, create, update
//! - `/api/runways` - List, get, update
//! - `GET /api/weather/current` - Latest weather reading
//! - `GET /api/dashboard/stats` - Aggregate counters
//!
//! # Configuration
//!
//! - `AIRPORT_ADMIN_HOST` / `AIRPORT_ADMIN_PORT` - Bind address (default `0.0.0.0:8080`)
//! - `RUST_LOG` - Log filter

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use airport_admin::api::{AppState, router};
use airport_admin::config::ServerConfig;
use airport_admin::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("airport_admin=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr();

    info!(%addr, "Starting Airport Admin server");

    // Sample data is rebuilt on every start; nothing is persisted
    let store = Store::seeded();
    info!("Sample data loaded");

    let app = router(AppState::new(store));

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Airport Admin is listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
