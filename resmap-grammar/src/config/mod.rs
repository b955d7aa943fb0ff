//! Configuration loading.
//!
//! - [`ConfigShape`] - the flat and nested JSON layouts
//! - [`ConfigLoader`] - file-or-defaults resolution into a [`Grammar`](crate::Grammar)

mod loader;
mod shape;

pub use loader::{ConfigLoader, ConfigSource, LoadedConfig};
pub use shape::{ConfigShape, NESTED_KEY};
