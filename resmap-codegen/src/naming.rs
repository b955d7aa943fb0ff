//! Import identifiers for module paths.

use indexmap::{IndexMap, IndexSet};
use resmap_core::{ModulePath, to_js_identifier};
use resmap_resolve::ResolutionMap;

/// One unique identifier per distinct module, in specifier order.
#[derive(Debug, Clone, Default)]
pub struct ModuleIdentifiers {
    by_module: IndexMap<ModulePath, String>,
}

impl ModuleIdentifiers {
    /// Assign identifiers to every module in the map.
    ///
    /// Two paths can flatten to the same identifier (`a-b` and `a_b`); later
    /// ones get a numeric suffix.
    pub fn new(map: &ResolutionMap) -> Self {
        let mut taken = IndexSet::new();
        let mut by_module = IndexMap::new();

        for (_, module) in map.sorted_entries() {
            if by_module.contains_key(module) {
                continue;
            }

            let base = to_js_identifier(module.as_str());
            let mut ident = base.clone();
            let mut n = 2;
            while taken.contains(&ident) {
                ident = format!("{}{}", base, n);
                n += 1;
            }

            taken.insert(ident.clone());
            by_module.insert(module.clone(), ident);
        }

        Self { by_module }
    }

    pub fn get(&self, module: &ModulePath) -> Option<&str> {
        self.by_module.get(module).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModulePath, &str)> {
        self.by_module.iter().map(|(m, i)| (m, i.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_module.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_module.is_empty()
    }
}
