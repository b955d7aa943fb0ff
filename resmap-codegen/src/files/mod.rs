//! The generated module map artifacts.

mod module_map_d_ts;
mod module_map_js;

pub use module_map_d_ts::{MODULE_MAP_D_TS, ModuleMapDts};
pub use module_map_js::{MODULE_MAP_JS, ModuleMapJs};
