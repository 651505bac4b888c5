//! Core type definitions used across the warehouse workspace.

pub mod params;

pub use params::{ListParams, SearchParams};
