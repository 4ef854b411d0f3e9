//! HTTP server initialization and runtime setup.
//!
//! Handles store setup, optional catalog seeding, and the Axum server
//! lifecycle including graceful shutdown.

use crate::application::services::ImportService;
use crate::config::{Config, StoreBackend, mask_connection_string};
use crate::domain::repositories::Repositories;
use crate::domain::seed::CatalogSeed;
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::{memory_repositories, postgres_repositories};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations, or the in-memory store
///   seeded from `SEED_FILE`
/// - Axum HTTP server
///
/// On Ctrl+C or SIGTERM the server stops accepting connections, drains
/// in-flight requests and closes the connection pool.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The seed file cannot be read or imported
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repositories, pool) = init_store(&config).await?;

    let state = AppState::new(&repositories);
    let app = app_router(state, &config);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    tracing::info!("Server stopped");

    Ok(())
}

/// Creates the configured store and returns repositories over it.
///
/// The pool is returned separately so it can be closed after shutdown.
async fn init_store(config: &Config) -> Result<(Repositories, Option<PgPool>)> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store backend")?;

            let pool = connect_pool(url, config).await?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations applied");

            Ok((postgres_repositories(Arc::new(pool.clone())), Some(pool)))
        }
        StoreBackend::Memory => {
            let repositories = memory_repositories(Arc::new(MemoryStore::new()));
            tracing::info!("Using in-memory store");

            if let Some(path) = &config.seed_file {
                let seed = CatalogSeed::from_path(path)?;
                let report = ImportService::new(repositories.clone())
                    .import(seed)
                    .await
                    .context("Failed to import seed file")?;
                tracing::info!(
                    courses = report.courses,
                    topic_lists = report.topic_lists,
                    resource_lists = report.resource_lists,
                    feedback = report.feedback,
                    "Seeded in-memory store from {}",
                    path.display()
                );
            }

            Ok((repositories, None))
        }
    }
}

/// Opens a PostgreSQL pool using the pool settings from `config`.
pub async fn connect_pool(database_url: &str, config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(database_url)
            )
        })?;

    tracing::info!("Connected to database");

    Ok(pool)
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
}
