//! Persistent Store Module
//!
//! The authoritative home of item records. [`PostgresStore`] backs the running
//! service; [`MemoryStore`] gives tests the same contract without a database.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{map_sqlx_error, PostgresStore};

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Item;

// == Store Error ==
/// Failures raised by a persistent store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert or update hit a unique constraint
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },

    /// Anything else: connectivity, driver or query failures
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl StoreError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Repository Trait ==
/// Single-row access to the `items` table.
///
/// `update` and `delete` are conditional on the row existing and report
/// absence through their return value, so the existence check and the
/// mutation happen in one statement.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts a new item and returns it with its generated id.
    async fn insert(&self, name: &str, description: &str) -> StoreResult<Item>;

    /// Looks up an item by id.
    async fn find(&self, id: i64) -> StoreResult<Option<Item>>;

    /// Overwrites name and description, returning the updated row or `None`
    /// when no row has that id.
    async fn update(&self, id: i64, name: &str, description: &str) -> StoreResult<Option<Item>>;

    /// Deletes the row, returning whether one existed.
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    /// Round-trips to the store.
    async fn ping(&self) -> StoreResult<()>;
}
