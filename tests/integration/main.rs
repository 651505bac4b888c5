//! Integration tests: the full HTTP stack over in-memory storage and cache.

mod helpers;

mod category_test;
mod health_test;
mod material_test;
mod validation_test;
mod warehouse_test;
