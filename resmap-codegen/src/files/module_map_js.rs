use std::path::PathBuf;

use resmap_core::{GeneratedFile, quote};
use resmap_resolve::ResolutionMap;

use crate::{
    CodeFile,
    ast::{Const, Export, Import, JsObject},
    naming::ModuleIdentifiers,
};

/// Path of the runtime module map, relative to the output root.
pub const MODULE_MAP_JS: &str = "config/module-map.js";

/// The runtime module map: one default import per module and an object
/// keyed by specifier.
pub struct ModuleMapJs<'a> {
    map: &'a ResolutionMap,
}

impl<'a> ModuleMapJs<'a> {
    pub fn new(map: &'a ResolutionMap) -> Self {
        Self { map }
    }
}

impl GeneratedFile for ModuleMapJs<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(MODULE_MAP_JS)
    }

    fn render(&self) -> String {
        let idents = ModuleIdentifiers::new(self.map);

        let imports = idents
            .iter()
            .map(|(module, ident)| Import::new(module.import_path()).default(ident));

        let object: JsObject = self
            .map
            .sorted_entries()
            .into_iter()
            .filter_map(|(specifier, module)| {
                idents
                    .get(module)
                    .map(|ident| (quote(specifier.as_str()), ident.to_string()))
            })
            .collect();

        CodeFile::new()
            .imports(imports)
            .add(Const::object("moduleMap", object))
            .export(Export::new().default("moduleMap"))
            .render()
    }
}
