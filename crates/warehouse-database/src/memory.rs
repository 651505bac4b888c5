//! In-memory storage doubles for tests.
//!
//! [`MemoryMaterialGateway`] keeps the four partitions in process and gives
//! transactions real all-or-nothing semantics: a transaction works on a copy
//! of the tables while holding the table lock, and only `commit` writes the
//! copy back. Every gateway call is counted, and inserts into chosen
//! partitions can be made to fail.
//!
//! Name searches compare case-insensitively, standing in for `ILIKE` and
//! the database collation.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use warehouse_core::error::AppError;
use warehouse_core::result::AppResult;
use warehouse_core::traits::{Entity, Repository};
use warehouse_core::types::{ListParams, SearchParams};
use warehouse_entity::category::MaterialCategory;
use warehouse_entity::material::{
    Material, MaterialDraft, MaterialIds, MaterialPartition, MaterialSearchHit,
};
use warehouse_entity::user::User;

use crate::gateway::{CategoryStore, MaterialGateway, MaterialTransaction, UserDirectory};

#[derive(Debug, Clone, Default)]
struct MaterialTables {
    rows: HashMap<MaterialPartition, BTreeMap<i64, Material>>,
    last_ids: HashMap<MaterialPartition, i64>,
    last_item_id: i64,
}

impl MaterialTables {
    fn get(&self, partition: MaterialPartition, id: i64) -> Option<Material> {
        self.rows.get(&partition).and_then(|t| t.get(&id)).cloned()
    }

    fn remove(&mut self, partition: MaterialPartition, id: i64) -> bool {
        self.rows
            .get_mut(&partition)
            .is_some_and(|t| t.remove(&id).is_some())
    }

    fn insert(&mut self, partition: MaterialPartition, draft: &MaterialDraft<'_>) -> AppResult<MaterialIds> {
        let other_fields = match &draft.other_fields {
            serde_json::Value::Object(map) => map.clone(),
            other => {
                return Err(AppError::database(format!(
                    "other_fields must be a JSON object, got {other}"
                )));
            }
        };

        let item_id = match draft.item_id {
            Some(item_id) => Some(item_id),
            None if partition.mints_item_id() => {
                self.last_item_id += 1;
                Some(self.last_item_id)
            }
            None => None,
        };
        if partition == MaterialPartition::PurchasedArchive && item_id.is_none() {
            return Err(AppError::database("purchased archive rows require an item_id"));
        }

        let id = {
            let last = self.last_ids.entry(partition).or_insert(0);
            *last += 1;
            *last
        };

        let mut fields = draft.fields.clone();
        fields.other_fields = other_fields;
        self.rows
            .entry(partition)
            .or_default()
            .insert(id, Material { id, item_id, fields });

        Ok(MaterialIds { id, item_id })
    }

    fn update(&mut self, partition: MaterialPartition, id: i64, draft: &MaterialDraft<'_>) -> AppResult<bool> {
        let Some(existing) = self.rows.get_mut(&partition).and_then(|t| t.get_mut(&id)) else {
            return Ok(false);
        };
        if existing.fields.company_id != draft.fields.company_id {
            return Ok(false);
        }
        let serde_json::Value::Object(other_fields) = &draft.other_fields else {
            return Err(AppError::database("other_fields must be a JSON object"));
        };
        existing.fields = draft.fields.clone();
        existing.fields.other_fields = other_fields.clone();
        Ok(true)
    }

    fn page(&self, partition: MaterialPartition, params: &ListParams) -> Vec<Material> {
        self.rows
            .get(&partition)
            .map(|t| {
                t.values()
                    .filter(|m| m.fields.company_id == params.company_id)
                    .skip(params.offset.max(0) as usize)
                    .take(params.limit.max(0) as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// In-memory [`MaterialGateway`] with call counting and failure injection.
#[derive(Debug, Clone, Default)]
pub struct MemoryMaterialGateway {
    tables: Arc<Mutex<MaterialTables>>,
    calls: Arc<AtomicUsize>,
    failing_inserts: Arc<StdMutex<HashSet<MaterialPartition>>>,
}

impl MemoryMaterialGateway {
    /// Create an empty gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of gateway and transaction calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every later insert into `partition` fail with a database error.
    pub fn fail_inserts_into(&self, partition: MaterialPartition) {
        self.failing_inserts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(partition);
    }

    /// Let inserts into every partition succeed again.
    pub fn clear_failures(&self) {
        self.failing_inserts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of rows currently committed in a partition.
    pub async fn count(&self, partition: MaterialPartition) -> usize {
        self.tables
            .lock()
            .await
            .rows
            .get(&partition)
            .map_or(0, BTreeMap::len)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn check_insert(failing: &HashSet<MaterialPartition>, partition: MaterialPartition) -> AppResult<()> {
        if failing.contains(&partition) {
            return Err(AppError::database(format!(
                "simulated failure inserting into {partition}"
            )));
        }
        Ok(())
    }

    fn failing(&self) -> HashSet<MaterialPartition> {
        self.failing_inserts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl MaterialGateway for MemoryMaterialGateway {
    async fn begin(&self) -> AppResult<Box<dyn MaterialTransaction>> {
        self.record_call();
        let guard = Arc::clone(&self.tables).lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(MemoryMaterialTransaction {
            guard,
            working,
            calls: Arc::clone(&self.calls),
            failing_inserts: self.failing(),
        }))
    }

    async fn find_by_id(&self, partition: MaterialPartition, id: i64) -> AppResult<Option<Material>> {
        self.record_call();
        Ok(self.tables.lock().await.get(partition, id))
    }

    async fn list(&self, partition: MaterialPartition, params: &ListParams) -> AppResult<Vec<Material>> {
        self.record_call();
        Ok(self.tables.lock().await.page(partition, params))
    }

    async fn create(&self, partition: MaterialPartition, draft: &MaterialDraft<'_>) -> AppResult<MaterialIds> {
        self.record_call();
        Self::check_insert(&self.failing(), partition)?;
        self.tables.lock().await.insert(partition, draft)
    }

    async fn update(
        &self,
        partition: MaterialPartition,
        id: i64,
        draft: &MaterialDraft<'_>,
    ) -> AppResult<bool> {
        self.record_call();
        self.tables.lock().await.update(partition, id, draft)
    }

    async fn delete(&self, partition: MaterialPartition, id: i64) -> AppResult<bool> {
        self.record_call();
        Ok(self.tables.lock().await.remove(partition, id))
    }

    async fn search(&self, params: &SearchParams) -> AppResult<Vec<MaterialSearchHit>> {
        self.record_call();
        let prefix = params.query.to_lowercase();
        let tables = self.tables.lock().await;

        let mut hits = Vec::new();
        for partition in [MaterialPartition::Planning, MaterialPartition::Purchased] {
            let Some(rows) = tables.rows.get(&partition) else {
                continue;
            };
            for material in rows.values() {
                if material.fields.company_id == params.page.company_id
                    && material.fields.name.to_lowercase().starts_with(&prefix)
                {
                    hits.push(MaterialSearchHit {
                        partition,
                        material: material.clone(),
                    });
                }
            }
        }
        hits.sort_by_cached_key(|hit| {
            (
                hit.material.fields.name.to_lowercase(),
                hit.partition,
                hit.material.id,
            )
        });

        Ok(page(hits, &params.page))
    }
}

/// Transaction over a private copy of the tables; holds the table lock.
struct MemoryMaterialTransaction {
    guard: OwnedMutexGuard<MaterialTables>,
    working: MaterialTables,
    calls: Arc<AtomicUsize>,
    failing_inserts: HashSet<MaterialPartition>,
}

#[async_trait]
impl MaterialTransaction for MemoryMaterialTransaction {
    async fn find_for_update(&mut self, partition: MaterialPartition, id: i64) -> AppResult<Option<Material>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.working.get(partition, id))
    }

    async fn delete(&mut self, partition: MaterialPartition, id: i64) -> AppResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.working.remove(partition, id))
    }

    async fn insert(&mut self, partition: MaterialPartition, draft: &MaterialDraft<'_>) -> AppResult<MaterialIds> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        MemoryMaterialGateway::check_insert(&self.failing_inserts, partition)?;
        self.working.insert(partition, draft)
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let MemoryMaterialTransaction { mut guard, working, .. } = *self;
        *guard = working;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory [`Repository`] that counts reads and can be told to fail them.
#[derive(Debug)]
pub struct MemoryRepository<E: Entity + Debug> {
    rows: StdMutex<BTreeMap<i64, E>>,
    last_id: AtomicI64,
    find_calls: AtomicUsize,
    fail_reads: AtomicBool,
}

impl<E: Entity + Debug> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self {
            rows: StdMutex::new(BTreeMap::new()),
            last_id: AtomicI64::new(0),
            find_calls: AtomicUsize::new(0),
            fail_reads: AtomicBool::new(false),
        }
    }
}

impl<E: Entity + Debug> MemoryRepository<E> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `find_by_id` calls so far.
    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    /// Make `find_by_id` fail with a database error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, BTreeMap<i64, E>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<E: Entity + Debug> Repository<E> for MemoryRepository<E> {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::database(format!("simulated {} read failure", E::KIND)));
        }
        Ok(self.rows().get(&id).cloned())
    }

    async fn create(&self, entity: &E) -> AppResult<i64> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut stored = entity.clone();
        stored.set_id(id);
        self.rows().insert(id, stored);
        Ok(id)
    }

    async fn update(&self, entity: &E) -> AppResult<bool> {
        let mut rows = self.rows();
        match rows.get_mut(&entity.id()) {
            Some(existing) if existing.company_id() == entity.company_id() => {
                *existing = entity.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.rows().remove(&id).is_some())
    }

    async fn list_by_company(&self, company_id: i64) -> AppResult<Vec<E>> {
        Ok(self
            .rows()
            .values()
            .filter(|e| e.company_id() == company_id)
            .cloned()
            .collect())
    }
}

/// Case-insensitive name prefix match; the query has no wildcards.
fn name_starts_with(name: &str, query: &str) -> bool {
    name.to_lowercase().starts_with(&query.to_lowercase())
}

fn page<T>(rows: Vec<T>, params: &ListParams) -> Vec<T> {
    rows.into_iter()
        .skip(params.offset.max(0) as usize)
        .take(params.limit.max(0) as usize)
        .collect()
}

/// In-memory [`CategoryStore`].
#[derive(Debug, Default)]
pub struct MemoryCategoryRepository {
    rows: StdMutex<BTreeMap<i64, MaterialCategory>>,
    last_id: AtomicI64,
}

impl MemoryCategoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, BTreeMap<i64, MaterialCategory>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryRepository {
    async fn create(&self, category: &MaterialCategory) -> AppResult<i64> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut stored = category.clone();
        stored.id = id;
        self.rows().insert(id, stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: i64, company_id: i64) -> AppResult<Option<MaterialCategory>> {
        Ok(self
            .rows()
            .get(&id)
            .filter(|c| c.company_id == company_id)
            .cloned())
    }

    async fn update(&self, category: &MaterialCategory) -> AppResult<bool> {
        let mut rows = self.rows();
        match rows.get_mut(&category.id) {
            Some(existing) if existing.company_id == category.company_id => {
                *existing = category.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, id: i64, company_id: i64) -> AppResult<bool> {
        let mut rows = self.rows();
        if rows.get(&id).is_some_and(|c| c.company_id == company_id) {
            rows.remove(&id);
            return Ok(true);
        }
        Ok(false)
    }

    async fn list(&self, params: &ListParams) -> AppResult<Vec<MaterialCategory>> {
        let owned: Vec<_> = self
            .rows()
            .values()
            .filter(|c| c.company_id == params.company_id)
            .cloned()
            .collect();
        Ok(page(owned, params))
    }

    async fn search(&self, params: &SearchParams) -> AppResult<Vec<MaterialCategory>> {
        let mut hits: Vec<_> = self
            .rows()
            .values()
            .filter(|c| c.company_id == params.page.company_id)
            .filter(|c| name_starts_with(&c.name, &params.query))
            .cloned()
            .collect();
        hits.sort_by_cached_key(|c| (c.name.to_lowercase(), c.id));
        Ok(page(hits, &params.page))
    }
}

/// In-memory [`UserDirectory`] seeded by tests.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: StdMutex<BTreeMap<i64, User>>,
}

impl MemoryUserRepository {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a user.
    pub fn insert(&self, user: User) {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.id, user);
    }
}

#[async_trait]
impl UserDirectory for MemoryUserRepository {
    async fn find_by_sections(&self, company_id: i64, sections: &[&str]) -> AppResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|u| u.company_id == company_id && u.has_any_section(sections))
            .cloned()
            .collect())
    }
}
