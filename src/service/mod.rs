//! Item Service
//!
//! Create/read/update/delete over the persistent store with the cache kept
//! as a read-through copy:
//! - read: cache first; on a miss load from the database and populate the cache
//! - update: write the database, then overwrite the cache with the new fields
//! - delete: delete from the database, then drop the cache entry
//! - create: database only; the cache is filled by the first read
//!
//! Cache hits are served without consulting the database. Requests touching
//! the same id are not coordinated, and entries never expire, so two races
//! can leave the cache wrong until the next write to that id:
//! - two updates: the slower one can leave its values cached behind a newer row
//! - a read miss and a delete: the reader loads the row, the delete removes
//!   the row and the entry, then the reader caches the row it loaded. The
//!   deleted item keeps being served with 200 until an update or delete
//!   of the same id clears it; both drop the entry even when they answer 404.


use std::sync::Arc;

use tracing::{info, warn};

use crate::cache::{CacheStats, ItemCache, StatsSnapshot};
use crate::error::{ApiError, Result};
use crate::models::{Item, ItemRequest, ItemView};
use crate::store::ItemRepository;

// == Item Service ==
/// Handler-facing item operations over a store and a cache.
pub struct ItemService {
    store: Arc<dyn ItemRepository>,
    cache: Arc<dyn ItemCache>,
    stats: CacheStats,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemRepository>, cache: Arc<dyn ItemCache>) -> Self {
        Self {
            store,
            cache,
            stats: CacheStats::new(),
        }
    }

    // == Create ==
    /// Inserts a new item. A taken name fails with [`ApiError::Conflict`].
    pub async fn create(&self, req: &ItemRequest) -> Result<Item> {
        validate(req)?;

        info!(
            "Creating item with name: {} and desc: {}",
            req.itemname, req.itemdesc
        );
        let item = self.store.insert(&req.itemname, &req.itemdesc).await?;
        info!("Created item with id: {}", item.id);

        Ok(item)
    }

    // == Read ==
    /// Returns an item, from the cache when present.
    pub async fn read(&self, id: i64) -> Result<ItemView> {
        match self.cache.get(id).await {
            Ok(Some(view)) => {
                self.stats.record_hit();
                info!("Fetching item from cache with id: {}", id);
                return Ok(view);
            }
            Ok(None) => {}
            Err(e) => warn!("Cache lookup for item {} failed, using database: {}", id, e),
        }
        self.stats.record_miss();

        info!("Fetching item from database with id: {}", id);
        let item = self.store.find(id).await?.ok_or(ApiError::NotFound)?;
        let view = ItemView::from(item);

        info!("Caching item with id: {}", id);
        if let Err(e) = self.cache.put(id, &view).await {
            warn!("Failed to cache item {}: {}", id, e);
        }

        Ok(view)
    }

    // == Update ==
    /// Overwrites name and description of an existing item.
    pub async fn update(&self, id: i64, req: &ItemRequest) -> Result<Item> {
        validate(req)?;

        info!("Updating item with id: {}", id);
        let Some(item) = self
            .store
            .update(id, &req.itemname, &req.itemdesc)
            .await?
        else {
            self.drop_orphan(id).await;
            return Err(ApiError::NotFound);
        };

        info!("Updating cached item with id: {}", id);
        self.cache.put(id, &ItemView::from(&item)).await?;

        Ok(item)
    }

    // == Delete ==
    /// Deletes an existing item and its cache entry.
    pub async fn delete(&self, id: i64) -> Result<()> {
        info!("Deleting item with id: {}", id);
        if !self.store.delete(id).await? {
            self.drop_orphan(id).await;
            return Err(ApiError::NotFound);
        }

        info!("Deleting cached item with id: {}", id);
        self.cache.remove(id).await?;

        Ok(())
    }

    /// Removes a cache entry whose row no longer exists. Best effort: the
    /// caller is already answering 404.
    async fn drop_orphan(&self, id: i64) {
        if let Err(e) = self.cache.remove(id).await {
            warn!("Failed to drop cache entry for missing item {}: {}", id, e);
        }
    }

    // == Health ==
    /// Pings both stores; returns `(database_ok, cache_ok)`.
    pub async fn health(&self) -> (bool, bool) {
        let (database, cache) = tokio::join!(self.store.ping(), self.cache.ping());
        if let Err(e) = &database {
            warn!("Database health check failed: {}", e);
        }
        if let Err(e) = &cache {
            warn!("Cache health check failed: {}", e);
        }
        (database.is_ok(), cache.is_ok())
    }

    // == Stats ==
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

fn validate(req: &ItemRequest) -> Result<()> {
    match req.validate() {
        Some(msg) => Err(ApiError::InvalidRequest(msg)),
        None => Ok(()),
    }
}
