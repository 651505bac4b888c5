//! # warehouse-core
//!
//! Core crate for the warehouse service. Contains the error system,
//! configuration schemas, list/search parameters, and the capability
//! traits (cache and repository) implemented by the backend crates.
//!
//! This crate has **no** internal dependencies on other warehouse crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
