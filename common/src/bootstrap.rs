// Bootstrap utilities for binary initialization

use crate::config::Settings;
use crate::db::DbPool;
use crate::errors::DatabaseError;
use anyhow::{Context, Result};
use tracing::info;

/// Initialize tracing for human-readable logging
///
/// `RUST_LOG` takes precedence; otherwise the configured log level is applied
/// to the registry crates.
pub fn init_tracing(settings: &Settings) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = &settings.observability.log_level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("registry={level},common={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Initialize database pool and verify connectivity
///
/// # Errors
/// Returns error if pool creation or the health check fails
#[tracing::instrument(skip(settings))]
pub async fn init_database_pool(settings: &Settings) -> Result<DbPool> {
    info!("Initializing database pool");

    let db_pool = DbPool::new(&settings.database)
        .await
        .context("Failed to initialize database pool")?;

    db_pool
        .health_check()
        .await
        .context("Database health check failed")?;

    info!("Database pool initialized");
    Ok(db_pool)
}

/// Apply pending schema migrations
///
/// Migrations live in `common/migrations` and are embedded at compile time.
#[tracing::instrument(skip(pool))]
pub async fn run_migrations(pool: &DbPool) -> Result<(), DatabaseError> {
    info!("Running database migrations");

    sqlx::migrate!().run(pool.pool()).await?;

    info!("Database migrations applied");
    Ok(())
}
