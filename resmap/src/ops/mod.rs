//! Core operations.
//!
//! Business logic for the resmap commands, separated from CLI argument
//! parsing and output rendering.

pub mod build;
pub mod check;
pub mod list;

pub use build::{BuildOptions, build};
pub use check::check;
pub use list::list;
