//! Fund Registry - API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # In-memory store
//! cargo run --bin fund-registry
//!
//! # PostgreSQL store
//! API_PORT=8080 API_DATABASE_URL=postgres://localhost/funds cargo run --bin fund-registry
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` - PostgreSQL connection string (`DATABASE_URL` also works)
//! * `API_DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! * `API_LOG_LEVEL` - Log filter (default: info)
//! * `API_MAX_UPLOAD_BYTES` - Largest accepted request body (default: 10 MiB)

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_fund::{FundService, FundStore, InMemoryFundStore};
use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresFundAdapter};
use interface_api::{config::ApiConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.log_level);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting fund registry");

    let store = build_store(&config).await?;
    let service = FundService::new(store);

    let addr = config.server_addr();
    let app = create_router(service, config);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Initializes the tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Picks the fund store: PostgreSQL when a URL is configured, memory otherwise
async fn build_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn FundStore>> {
    match &config.database_url {
        Some(url) => {
            let db_config = DatabaseConfig::new(url.as_str()).max_connections(config.db_max_connections);
            let pool = create_pool(db_config).await.context("failed to connect to database")?;
            run_migrations(&pool).await.context("failed to run migrations")?;
            Ok(Arc::new(PostgresFundAdapter::new(pool)))
        }
        None => {
            tracing::warn!("No database URL configured, funds are kept in memory");
            Ok(Arc::new(InMemoryFundStore::new()))
        }
    }
}

/// Waits for Ctrl+C or SIGTERM
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
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
