//! In-memory cache backend
//!
//! Keeps the same hash-per-key layout as Redis so entries round-trip through
//! the same field mapping.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{cache_key, from_fields, to_fields, CacheResult, ItemCache};
use crate::models::ItemView;

type Hash = HashMap<String, String>;

/// Item cache held in process memory.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Hash>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an entry exists for `id`.
    pub async fn contains(&self, id: i64) -> bool {
        self.entries.read().await.contains_key(&cache_key(id))
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ItemCache for MemoryCache {
    async fn get(&self, id: i64) -> CacheResult<Option<ItemView>> {
        let fields = self
            .entries
            .read()
            .await
            .get(&cache_key(id))
            .cloned()
            .unwrap_or_default();
        Ok(from_fields(fields))
    }

    async fn put(&self, id: i64, view: &ItemView) -> CacheResult<()> {
        let mut entries = self.entries.write().await;
        let hash = entries.entry(cache_key(id)).or_default();
        for (field, value) in to_fields(view) {
            hash.insert(field.to_string(), value);
        }
        Ok(())
    }

    async fn remove(&self, id: i64) -> CacheResult<()> {
        self.entries.write().await.remove(&cache_key(id));
        Ok(())
    }

    async fn ping(&self) -> CacheResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let cache = MemoryCache::new();
        let view = ItemView::new("pen", "blue pen");
        cache.put(1, &view).await.unwrap();
        assert_eq!(cache.get(1).await.unwrap(), Some(view));
        assert_eq!(cache.get(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = MemoryCache::new();
        cache.put(1, &ItemView::new("pen", "blue pen")).await.unwrap();
        cache
            .put(1, &ItemView::new("inkpen", "blue ink pen"))
            .await
            .unwrap();
        assert_eq!(
            cache.get(1).await.unwrap(),
            Some(ItemView::new("inkpen", "blue ink pen"))
        );
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_noop() {
        let cache = MemoryCache::new();
        assert!(cache.remove(99).await.is_ok());
        cache.put(1, &ItemView::new("pen", "blue pen")).await.unwrap();
        cache.remove(1).await.unwrap();
        cache.remove(1).await.unwrap();
        assert!(cache.is_empty().await);
    }
}
