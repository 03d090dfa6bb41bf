//! Core operations.
//!
//! This module contains the business logic for wimaint commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod status;
pub mod targets;
pub mod templates;

pub use check::check;
pub use clean::clean;
pub use status::status;
pub use targets::targets;
pub use templates::templates;
