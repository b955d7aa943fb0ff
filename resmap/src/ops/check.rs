//! Check operation - grammar and tree validation.

use resmap::{LoadedConfig, ResolutionMap};

use crate::reports::CheckReport;

/// Summarise a loaded grammar and the map it resolved.
///
/// Reaching this point means the configuration is valid and the tree
/// resolved without conflicts.
pub fn check(loaded: &LoadedConfig, map: &ResolutionMap) -> CheckReport {
    let grammar = &loaded.grammar;

    CheckReport {
        source: loaded.source.clone(),
        module_prefix: grammar.module_prefix().to_string(),
        types: grammar.types().keys().cloned().collect(),
        collections: grammar
            .collections()
            .iter()
            .map(|(name, def)| match &def.group {
                Some(group) => format!("{}/{}", group, name),
                None => name.clone(),
            })
            .collect(),
        specifier_count: map.len(),
        unresolved_collections: map.unresolved_collections().iter().cloned().collect(),
    }
}
