//! Module grammar configuration for resmap.
//!
//! The grammar names the types (`component`, `template`) and collections
//! (`components`, `utils`) a source tree is organised by. It is loaded from
//! a JSON file or from caller defaults and validated once, up front.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod grammar;

pub use config::{ConfigLoader, ConfigShape, ConfigSource, LoadedConfig, NESTED_KEY};
pub use error::{Error, Result, SourceContext};
pub use grammar::{CollectionDef, Grammar, ModuleConfiguration, TypeDef};
