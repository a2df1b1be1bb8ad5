//! Startup wiring: pools, schema and the application context.

use std::sync::Arc;

use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

use crate::api::AppState;
use crate::cache::RedisCache;
use crate::config::Config;
use crate::service::ItemService;
use crate::store::PostgresStore;

/// Everything `main` needs to serve and later shut down.
pub struct Application {
    pub state: AppState,
    /// Kept so the pool can be closed after the server stops
    pub db_pool: PgPool,
}

/// Connects to Postgres, creates the `items` table if absent, builds the
/// Redis pool and wraps both in the shared [`AppState`].
pub async fn build(config: &Config) -> anyhow::Result<Application> {
    info!("Connecting to database at {}", config.redacted_database_url());
    let db_pool = PostgresStore::connect(&config.database_url(), config.db_max_connections)
        .await
        .context("failed to connect to Postgres")?;

    let store = PostgresStore::new(db_pool.clone());
    store
        .ensure_schema()
        .await
        .context("failed to create items table")?;
    info!("Database ready");

    let cache = RedisCache::new(&config.redis_url(), config.redis_pool_size)
        .context("failed to create Redis pool")?;
    info!("Cache pool created for {}", config.redis_url());

    let service = ItemService::new(Arc::new(store), Arc::new(cache));

    Ok(Application {
        state: AppState::new(service),
        db_pool,
    })
}
