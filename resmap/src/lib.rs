//! Build-time generator of static module maps.
//!
//! [`ResolutionMapBuilder`] scans a component source tree, derives the
//! module specifier of every unit from a type/collection grammar, and writes
//! `config/module-map.d.ts` and `config/module-map.js`.

#![allow(unused_assignments)]

mod builder;
mod error;
mod options;

pub use builder::{BuildOutcome, ResolutionMapBuilder};
pub use error::{Error, Result};
pub use options::BuilderOptions;
pub use resmap_codegen::{MODULE_MAP_D_TS, MODULE_MAP_JS, PreviewFile};
pub use resmap_core::{ModulePath, Specifier};
pub use resmap_grammar::{ConfigSource, Grammar, LoadedConfig, ModuleConfiguration};
pub use resmap_resolve::ResolutionMap;
