//! The specifier to module mapping produced by resolution.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use resmap_core::{ModulePath, Specifier};

use crate::{Error, Result};

/// Specifiers mapped to the module each one resolves to.
///
/// Insertion order follows the walk. Use [`ResolutionMap::sorted_entries`]
/// for a stable view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionMap {
    mapping: IndexMap<Specifier, ModulePath>,
    unresolved_collections: BTreeSet<String>,
}

impl ResolutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a specifier.
    ///
    /// Returns `Ok(false)` if the exact pair is already present.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::SpecifierConflict`] if the specifier already maps
    /// to a different module.
    pub fn insert(&mut self, specifier: Specifier, module: ModulePath) -> Result<bool> {
        match self.mapping.get(&specifier) {
            Some(existing) if *existing == module => Ok(false),
            Some(existing) => Err(Error::SpecifierConflict {
                first: existing.clone(),
                second: module,
                specifier,
            }),
            None => {
                self.mapping.insert(specifier, module);
                Ok(true)
            }
        }
    }

    pub(crate) fn mark_unresolved<I>(&mut self, collections: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.unresolved_collections.extend(collections);
    }

    pub fn get(&self, specifier: &str) -> Option<&ModulePath> {
        self.mapping.get(specifier)
    }

    pub fn contains(&self, specifier: &str) -> bool {
        self.mapping.contains_key(specifier)
    }

    pub fn mapping(&self) -> &IndexMap<Specifier, ModulePath> {
        &self.mapping
    }

    /// Unresolvable collections seen during the walk.
    pub fn unresolved_collections(&self) -> &BTreeSet<String> {
        &self.unresolved_collections
    }

    /// All specifiers in lexicographic order.
    pub fn specifiers(&self) -> Vec<&Specifier> {
        let mut specifiers: Vec<&Specifier> = self.mapping.keys().collect();
        specifiers.sort();
        specifiers
    }

    /// All entries ordered by specifier.
    pub fn sorted_entries(&self) -> Vec<(&Specifier, &ModulePath)> {
        let mut entries: Vec<_> = self.mapping.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
