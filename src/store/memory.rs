//! In-process item repository with Postgres-like semantics.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ItemRepository, StoreError, StoreResult};
use crate::models::Item;

const NAME_CONSTRAINT: &str = "items_itemname_key";

#[derive(Debug, Default)]
struct Table {
    /// Last generated id; ids start at 1 and are never reused
    last_id: i64,
    rows: BTreeMap<i64, Item>,
}

impl Table {
    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|row| row.name == name && Some(row.id) != except)
    }
}

/// Item repository held in memory.
///
/// Enforces name uniqueness and generates ids the way a `BIGSERIAL`
/// column does, so it can stand in for [`super::PostgresStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites a row without touching any cache, like an out-of-band
    /// `UPDATE` run directly against the database. Returns whether the row existed.
    pub async fn overwrite(&self, id: i64, name: &str, description: &str) -> bool {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                row.name = name.to_string();
                row.description = description.to_string();
                true
            }
            None => false,
        }
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn duplicate() -> StoreError {
    StoreError::Duplicate {
        constraint: NAME_CONSTRAINT.to_string(),
    }
}

#[async_trait]
impl ItemRepository for MemoryStore {
    async fn insert(&self, name: &str, description: &str) -> StoreResult<Item> {
        let mut table = self.table.write().await;
        // Postgres consumes a sequence value even when the insert fails
        table.last_id += 1;
        if table.name_taken(name, None) {
            return Err(duplicate());
        }
        let item = Item {
            id: table.last_id,
            name: name.to_string(),
            description: description.to_string(),
        };
        table.rows.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find(&self, id: i64) -> StoreResult<Option<Item>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, name: &str, description: &str) -> StoreResult<Option<Item>> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }
        if table.name_taken(name, Some(id)) {
            return Err(duplicate());
        }
        let row = table.rows.get_mut(&id).map(|row| {
            row.name = name.to_string();
            row.description = description.to_string();
            row.clone()
        });
        Ok(row)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
