//! # warehouse-api
//!
//! HTTP API layer for the warehouse service built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, logging, request
//! deadline), validating extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
