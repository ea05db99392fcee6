//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, database connections, migrations, and the Axum
//! server lifecycle.

use crate::application::services::UrlService;
use crate::config::{Config, StoreKind};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{InMemoryUrlRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Opens a PostgreSQL pool using the configured URL and pool settings.
///
/// The deployment's `project_id` is reported as the connection's
/// `application_name`, so sessions can be told apart in `pg_stat_activity`.
///
/// # Errors
///
/// Returns an error if no database URL is configured, the URL cannot be
/// parsed, or the first connection cannot be established.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    let options = PgConnectOptions::from_str(database_url)
        .context("Invalid DATABASE_URL")?
        .application_name(&config.project_id);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Applies pending schema migrations from `./migrations`.
///
/// # Errors
///
/// Returns an error if any migration fails.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    Ok(())
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The URL store (PostgreSQL with migrations applied, or in-memory)
/// - The alias service
/// - Axum HTTP server with trailing-slash normalization
///
/// Stops on Ctrl-C after in-flight requests finish, then closes the pool.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repository, pool): (Arc<dyn UrlRepository>, Option<PgPool>) = match config.store {
        StoreKind::Postgres => {
            let pool = connect_pool(&config).await?;
            tracing::info!("Connected to database");

            migrate(&pool).await?;
            tracing::info!("Migrations applied");

            let repository: Arc<dyn UrlRepository> =
                Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
            (repository, Some(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store, records will be lost on exit");
            let repository: Arc<dyn UrlRepository> = Arc::new(InMemoryUrlRepository::new());
            (repository, None)
        }
    };

    let url_service = UrlService::new(repository, config.base_url.clone())
        .with_alias_max_attempts(config.alias_max_attempts);
    let state = AppState::new(Arc::new(url_service));

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
