//! Read-through caching over a storage repository.
//!
//! Lookups by id consult the cache first. A miss falls back to the wrapped
//! repository and stores the result under `<kind>_<id>`. Writes go straight
//! to storage; cached entries are never invalidated and age out by TTL.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use warehouse_core::error::{AppError, ErrorKind};
use warehouse_core::result::AppResult;
use warehouse_core::traits::{CacheProvider, Entity, Repository};

use crate::keys;

/// Repository decorator that serves `find_by_id` through a cache.
#[derive(Debug)]
pub struct ReadThroughRepository<E: Entity> {
    storage: Arc<dyn Repository<E>>,
    cache: Arc<dyn CacheProvider>,
    ttl: Duration,
}

impl<E: Entity> ReadThroughRepository<E> {
    /// Wrap `storage` with `cache`, populating entries with `ttl`.
    pub fn new(storage: Arc<dyn Repository<E>>, cache: Arc<dyn CacheProvider>, ttl: Duration) -> Self {
        Self {
            storage,
            cache,
            ttl,
        }
    }
}

impl<E> ReadThroughRepository<E>
where
    E: Entity + Serialize + DeserializeOwned + Debug,
{
    async fn populate(&self, key: &str, entity: &E) {
        let value = match serde_json::to_string(entity) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to encode {} for caching", E::KIND);
                return;
            }
        };
        if let Err(e) = self.cache.set(key, &value, self.ttl).await {
            warn!(key, error = %e, "Failed to populate cache");
        }
    }
}

#[async_trait]
impl<E> Repository<E> for ReadThroughRepository<E>
where
    E: Entity + Serialize + DeserializeOwned + Debug,
{
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        if id == 0 {
            return Err(AppError::empty_id());
        }

        let key = keys::entity_by_id(E::KIND, id);
        if let Some(cached) = self.cache.get(&key).await? {
            let entity = serde_json::from_str(&cached).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Serialization,
                    format!("cached entry '{key}' could not be decoded"),
                    e,
                )
            })?;
            debug!(key, "Cache hit");
            return Ok(Some(entity));
        }

        debug!(key, "Cache miss");
        let Some(entity) = self.storage.find_by_id(id).await? else {
            return Ok(None);
        };
        self.populate(&key, &entity).await;
        Ok(Some(entity))
    }

    async fn create(&self, entity: &E) -> AppResult<i64> {
        self.storage.create(entity).await
    }

    async fn update(&self, entity: &E) -> AppResult<bool> {
        self.storage.update(entity).await
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        self.storage.delete(id).await
    }

    async fn list_by_company(&self, company_id: i64) -> AppResult<Vec<E>> {
        self.storage.list_by_company(company_id).await
    }
}
