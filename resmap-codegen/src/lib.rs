//! Rendering of the module map artifacts.
//!
//! Given a [`ResolutionMap`](resmap_resolve::ResolutionMap), the [`Emitter`]
//! produces `config/module-map.d.ts` and `config/module-map.js` and commits
//! them together.

pub mod ast;
pub mod builder;
mod code_file;
mod emitter;
pub mod files;
mod naming;

pub use code_file::CodeFile;
pub use emitter::{Emitter, PreviewFile};
pub use files::{MODULE_MAP_D_TS, MODULE_MAP_JS};
pub use naming::ModuleIdentifiers;
