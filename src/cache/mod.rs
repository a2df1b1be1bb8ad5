//! Cache Module
//!
//! Advisory copies of item fields keyed by item id. Entries never expire;
//! they are written after a read miss, overwritten on update and removed on
//! delete. [`RedisCache`] backs the running service, [`MemoryCache`] backs tests.

mod memory;
mod redis;
mod stats;

pub use memory::MemoryCache;
pub use redis::RedisCache;
pub use stats::{CacheStats, StatsSnapshot};

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ItemView;

// == Public Constants ==
/// Hash field holding the item name
pub const FIELD_NAME: &str = "item_name";

/// Hash field holding the item description
pub const FIELD_DESC: &str = "item_desc";

// == Cache Error ==
/// Failures raised by a cache backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No connection could be checked out of the pool
    #[error("cache connection unavailable: {0}")]
    Pool(String),

    /// The backend rejected or failed a command
    #[error("cache command failed: {0}")]
    Command(String),
}

/// Convenience Result type for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Cache key for an item: the decimal form of its id.
pub fn cache_key(id: i64) -> String {
    id.to_string()
}

/// Builds the hash field mapping stored for an item.
pub fn to_fields(view: &ItemView) -> [(&'static str, String); 2] {
    [
        (FIELD_NAME, view.item_name.clone()),
        (FIELD_DESC, view.item_desc.clone()),
    ]
}

/// Reads an item back from its hash field mapping.
///
/// An empty mapping is a miss. A mapping missing either field is also
/// treated as a miss so the caller refreshes it from the database.
pub fn from_fields(mut fields: HashMap<String, String>) -> Option<ItemView> {
    if fields.is_empty() {
        return None;
    }
    let name = fields.remove(FIELD_NAME);
    let desc = fields.remove(FIELD_DESC);
    match (name, desc) {
        (Some(item_name), Some(item_desc)) => Some(ItemView {
            item_name,
            item_desc,
        }),
        _ => {
            tracing::warn!("Ignoring incomplete cache entry");
            None
        }
    }
}

// == Cache Trait ==
/// Key-value access to cached item fields.
#[async_trait]
pub trait ItemCache: Send + Sync {
    /// Returns the cached fields for `id`, if any.
    async fn get(&self, id: i64) -> CacheResult<Option<ItemView>>;

    /// Stores (or overwrites) the fields for `id`.
    async fn put(&self, id: i64, view: &ItemView) -> CacheResult<()>;

    /// Removes the entry for `id`. Removing an absent key is not an error.
    async fn remove(&self, id: i64) -> CacheResult<()>;

    /// Round-trips to the backend.
    async fn ping(&self) -> CacheResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_decimal_id() {
        assert_eq!(cache_key(42), "42");
        assert_eq!(cache_key(9_000_000_000), "9000000000");
    }

    #[test]
    fn test_from_fields_empty_is_miss() {
        assert_eq!(from_fields(HashMap::new()), None);
    }

    #[test]
    fn test_from_fields_partial_is_miss() {
        let fields = HashMap::from([(FIELD_NAME.to_string(), "pen".to_string())]);
        assert_eq!(from_fields(fields), None);
    }

    #[test]
    fn test_fields_mapping() {
        let view = ItemView::new("pen", "blue pen");
        let fields: HashMap<String, String> = to_fields(&view)
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(fields.get("item_name").map(String::as_str), Some("pen"));
        assert_eq!(from_fields(fields), Some(view));
    }
}
