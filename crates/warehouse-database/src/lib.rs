//! # warehouse-database
//!
//! PostgreSQL connection management, concrete repositories for every
//! entity, and the transactional material gateway used by lifecycle moves.
//!
//! The `testing` feature adds in-memory implementations of the gateway and
//! of the generic repository for use in other crates' tests.

pub mod connection;
pub mod gateway;
#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use gateway::{CategoryStore, MaterialGateway, MaterialTransaction, UserDirectory};
