//! Request handlers, one module per resource.

pub mod category;
pub mod health;
pub mod material;
pub mod supplier;
pub mod user;
pub mod warehouse;
