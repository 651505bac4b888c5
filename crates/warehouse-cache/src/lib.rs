//! # warehouse-cache
//!
//! Cache providers for the warehouse service. Supports two modes:
//!
//! - **memory**: In-process cache using [moka](https://crates.io/crates/moka)
//! - **redis**: Redis-backed cache using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration.
//! [`ReadThroughRepository`] layers any provider over a storage repository.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
pub mod read_through;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
pub use read_through::ReadThroughRepository;
