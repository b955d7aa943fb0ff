//! JavaScript and TypeScript syntax builders for the generated artifacts.

mod consts;
mod exports;
mod imports;
mod interface;
mod objects;

pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use interface::Interface;
pub use objects::{JsObject, Property};
