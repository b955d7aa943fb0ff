//! Core types and utilities for the resmap module map generator.
//!
//! This crate provides the value types and file primitives shared by
//! the grammar, resolver and emitter crates.

mod file;
mod types;
mod utils;

// File operations
pub use file::{File, GeneratedFile, commit_all};
// Fundamental types
pub use types::{ModulePath, Specifier};
// String utilities
pub use utils::{quote, to_js_identifier};
