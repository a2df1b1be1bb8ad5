//! Postgres-backed item repository.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{ItemRepository, StoreError, StoreResult};
use crate::models::Item;

const CREATE_ITEMS_TABLE: &str = "CREATE TABLE IF NOT EXISTS items (\
    itemid BIGSERIAL PRIMARY KEY, \
    itemname VARCHAR(100) NOT NULL UNIQUE, \
    itemdesc VARCHAR(1000) NOT NULL\
)";

/// Maps sqlx failures onto the store taxonomy.
pub fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Duplicate {
            constraint: db.constraint().unwrap_or("unknown").to_string(),
        },
        other => StoreError::from_persistence(other),
    }
}

/// Item repository over a shared Postgres pool.
///
/// Every call checks a connection out of the pool and returns it when the
/// query future completes or is dropped.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
    }

    /// Creates the `items` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_ITEMS_TABLE)
            .execute(&self.pool)
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl ItemRepository for PostgresStore {
    async fn insert(&self, name: &str, description: &str) -> StoreResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (itemname, itemdesc) VALUES ($1, $2) \
             RETURNING itemid, itemname, itemdesc",
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find(&self, id: i64) -> StoreResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT itemid, itemname, itemdesc FROM items WHERE itemid = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn update(&self, id: i64, name: &str, description: &str) -> StoreResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "UPDATE items SET itemname = $2, itemdesc = $3 WHERE itemid = $1 \
             RETURNING itemid, itemname, itemdesc",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        sqlx::query("DELETE FROM items WHERE itemid = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected() > 0)
            .map_err(map_sqlx_error)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_sqlx_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_persistence_error() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Persistence(_)));
    }

    #[test]
    fn test_pool_timeout_is_persistence_error() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Persistence(_)));
    }
}
