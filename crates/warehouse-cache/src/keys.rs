//! Cache key builders for every cache entry the service writes.
//!
//! Keys are `<kind>_<id>`. Backends may add their own namespace prefix on
//! top (see `RedisCacheConfig::key_prefix`).

/// Cache key for a record of the given kind.
pub fn entity_by_id(kind: &str, id: i64) -> String {
    format!("{kind}_{id}")
}

/// Cache key for a warehouse by ID.
pub fn warehouse_by_id(id: i64) -> String {
    entity_by_id("warehouse", id)
}

/// Cache key for a supplier by ID.
pub fn supplier_by_id(id: i64) -> String {
    entity_by_id("supplier", id)
}
