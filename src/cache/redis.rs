//! Redis cache backend
//!
//! Each item is a Redis hash `{item_name, item_desc}` under its decimal id.

use std::collections::HashMap;

use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config as PoolConfig, Connection, Pool, Runtime};
use tracing::debug;

use super::{cache_key, from_fields, to_fields, CacheError, CacheResult, ItemCache};
use crate::models::ItemView;

/// Redis-backed item cache with connection pooling.
///
/// Connections are checked out per call and go back to the pool on drop.
#[derive(Clone)]
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    /// Creates the connection pool. Connections are opened lazily.
    ///
    /// # Errors
    /// Returns `Err` if the URL is invalid or the pool cannot be built.
    pub fn new(url: &str, pool_size: usize) -> CacheResult<Self> {
        let mut cfg = PoolConfig::from_url(url);
        cfg.pool = Some(deadpool_redis::PoolConfig::new(pool_size));

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CacheError::Pool(format!("Failed to create Redis pool: {}", e)))?;

        Ok(Self { pool })
    }

    async fn connection(&self) -> CacheResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| CacheError::Pool(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl ItemCache for RedisCache {
    async fn get(&self, id: i64) -> CacheResult<Option<ItemView>> {
        let key = cache_key(id);
        let mut conn = self.connection().await?;

        let fields: HashMap<String, String> = conn
            .hgetall(&key)
            .await
            .map_err(|e| CacheError::Command(format!("HGETALL {} failed: {}", key, e)))?;

        let view = from_fields(fields);
        debug!(
            "Redis HGETALL {} -> {}",
            key,
            if view.is_some() { "HIT" } else { "MISS" }
        );
        Ok(view)
    }

    async fn put(&self, id: i64, view: &ItemView) -> CacheResult<()> {
        let key = cache_key(id);
        let mut conn = self.connection().await?;

        conn.hset_multiple::<_, _, _, ()>(&key, &to_fields(view))
            .await
            .map_err(|e| CacheError::Command(format!("HSET {} failed: {}", key, e)))?;

        debug!("Redis HSET {}", key);
        Ok(())
    }

    async fn remove(&self, id: i64) -> CacheResult<()> {
        let key = cache_key(id);
        let mut conn = self.connection().await?;

        conn.del::<_, ()>(&key)
            .await
            .map_err(|e| CacheError::Command(format!("DEL {} failed: {}", key, e)))?;

        debug!("Redis DEL {}", key);
        Ok(())
    }

    async fn ping(&self) -> CacheResult<()> {
        let mut conn = self.connection().await?;

        let pong: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut *conn)
            .await
            .map_err(|e| CacheError::Command(format!("PING failed: {}", e)))?;

        if pong.contains("PONG") {
            Ok(())
        } else {
            Err(CacheError::Command(format!("unexpected PING reply: {}", pong)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creation_is_lazy() {
        // Nothing listens here; building the pool must still succeed.
        assert!(RedisCache::new("redis://127.0.0.1:1", 2).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_rejected() {
        assert!(RedisCache::new("not a url", 2).is_err());
    }
}
