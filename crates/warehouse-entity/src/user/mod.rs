//! User domain entities.

pub mod model;
pub mod section;

pub use model::User;
pub use section::Section;
