//! Turns discovered units into specifiers.

use std::path::Path;

use resmap_core::Specifier;
use resmap_grammar::{CollectionDef, Grammar};

use crate::{
    ResolutionMap, Result,
    walker::{DiscoveredUnit, MARKUP_TYPE, SignalKind, Walk, Walker},
};

/// Applies the grammar to each unit a [`Walk`] yields.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'g> {
    grammar: &'g Grammar,
}

impl<'g> Resolver<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// Drain a walk into a resolution map.
    ///
    /// Stops at the first walk error or specifier conflict.
    pub fn resolve(&self, mut walk: Walk<'_>) -> Result<ResolutionMap> {
        let mut map = ResolutionMap::new();

        for unit in walk.by_ref() {
            self.resolve_unit(&unit?, &mut map)?;
        }

        map.mark_unresolved(walk.unresolved_collections().iter().cloned());
        tracing::debug!(
            specifiers = map.len(),
            unresolved = map.unresolved_collections().len(),
            "resolution finished"
        );
        Ok(map)
    }

    /// Add every specifier a single unit qualifies for.
    pub fn resolve_unit(&self, unit: &DiscoveredUnit, map: &mut ResolutionMap) -> Result<()> {
        if !unit.resolvable {
            tracing::trace!(unit = %unit.name, collection = %unit.collection, "unresolvable");
            return Ok(());
        }

        let Some(def) = self.grammar.collection(&unit.collection) else {
            return Ok(());
        };

        for signal in &unit.signals {
            let Some(type_name) = applicable_type(def, &signal.kind) else {
                tracing::debug!(
                    unit = %unit.name,
                    module = %signal.module,
                    "no applicable type, skipping"
                );
                continue;
            };

            let specifier = Specifier::new(type_name, self.grammar.module_prefix(), unit.segments());
            if !map.insert(specifier, signal.module.clone())? {
                tracing::trace!(module = %signal.module, "duplicate specifier ignored");
            }
        }

        Ok(())
    }
}

/// The type a signal contributes within a collection, if any.
fn applicable_type<'a>(def: &'a CollectionDef, kind: &'a SignalKind) -> Option<&'a str> {
    match kind {
        SignalKind::Marker(type_name) => def.has_type(type_name).then_some(type_name.as_str()),
        SignalKind::Markup => def.has_type(MARKUP_TYPE).then_some(MARKUP_TYPE),
        SignalKind::Source => def.default_type.as_deref(),
    }
}

/// Walk a tree and resolve it in one step.
pub fn resolve_tree(grammar: &Grammar, root: &Path, base_dir: Option<&Path>) -> Result<ResolutionMap> {
    let mut walker = Walker::new(grammar, root);
    if let Some(dir) = base_dir {
        walker = walker.base_dir(dir);
    }
    Resolver::new(grammar).resolve(walker.walk()?)
}

#[cfg(test)]
mod tests {
    use resmap_core::ModulePath;

    use super::*;
    use crate::walker::TypeSignal;

    fn def() -> CollectionDef {
        CollectionDef {
            types: ["component".to_string(), "template".to_string()].into_iter().collect(),
            default_type: Some("component".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_applicable_type() {
        let def = def();
        assert_eq!(
            applicable_type(&def, &SignalKind::Marker("template".into())),
            Some("template")
        );
        assert_eq!(applicable_type(&def, &SignalKind::Marker("helper".into())), None);
        assert_eq!(applicable_type(&def, &SignalKind::Markup), Some("template"));
        assert_eq!(applicable_type(&def, &SignalKind::Source), Some("component"));

        let bare = CollectionDef::default();
        assert_eq!(applicable_type(&bare, &SignalKind::Markup), None);
        assert_eq!(applicable_type(&bare, &SignalKind::Source), None);
    }

    #[test]
    fn test_unresolvable_unit_contributes_nothing() {
        let mut collections = indexmap::IndexMap::new();
        collections.insert("components".to_string(), def());
        let mut types = indexmap::IndexMap::new();
        for ty in ["component", "template"] {
            types.insert(
                ty.to_string(),
                resmap_grammar::TypeDef {
                    definitive_collection: "components".into(),
                },
            );
        }
        let grammar = Grammar::new(
            "app",
            resmap_grammar::ModuleConfiguration { types, collections },
        )
        .unwrap();

        let mut unit = DiscoveredUnit {
            name: "widget".into(),
            collection: "components".into(),
            group: None,
            namespace: vec!["components".into()],
            resolvable: false,
            signals: vec![TypeSignal {
                kind: SignalKind::Source,
                module: ModulePath::from("components/widget"),
            }],
        };

        let resolver = Resolver::new(&grammar);
        let mut map = ResolutionMap::new();
        resolver.resolve_unit(&unit, &mut map).unwrap();
        assert!(map.is_empty());

        unit.resolvable = true;
        resolver.resolve_unit(&unit, &mut map).unwrap();
        assert!(map.contains("component:/app/components/widget"));
    }
}
