use std::path::PathBuf;

use resmap_core::{GeneratedFile, quote};
use resmap_resolve::ResolutionMap;

use crate::{
    CodeFile,
    ast::{Const, Export, Interface},
};

/// Path of the type declarations, relative to the output root.
pub const MODULE_MAP_D_TS: &str = "config/module-map.d.ts";

/// Type declarations for the module map.
pub struct ModuleMapDts<'a> {
    map: &'a ResolutionMap,
}

impl<'a> ModuleMapDts<'a> {
    pub fn new(map: &'a ResolutionMap) -> Self {
        Self { map }
    }
}

impl GeneratedFile for ModuleMapDts<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(MODULE_MAP_D_TS)
    }

    fn render(&self) -> String {
        let interface = self
            .map
            .specifiers()
            .into_iter()
            .fold(Interface::new("ModuleMap"), |iface, specifier| {
                iface.field(quote(specifier.as_str()), "unknown")
            });

        CodeFile::new()
            .add(interface)
            .add(Const::declare("moduleMap", "ModuleMap"))
            .export(Export::new().default("moduleMap"))
            .render()
    }
}
