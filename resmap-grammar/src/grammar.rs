//! The type/collection grammar that drives specifier resolution.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Definition of a type (e.g. `component`, `template`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDef {
    /// The collection this type canonically lives in.
    pub definitive_collection: String,
}

/// Definition of a collection (e.g. `components`, `utils`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDef {
    /// Directory the collection lives under (e.g. `ui`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Types a member unit may take.
    #[serde(default)]
    pub types: IndexSet<String>,

    /// Type used when a unit carries no explicit type signal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_type: Option<String>,

    /// Collections that may appear nested in this collection's units
    /// without contributing a namespace segment.
    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub private_collections: IndexSet<String>,

    /// Members are walked but never exposed as specifiers.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unresolvable: bool,
}

impl CollectionDef {
    /// Check whether a unit in this collection may take the given type.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }
}

/// The `types`/`collections` half of a configuration, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfiguration {
    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,

    #[serde(default)]
    pub collections: IndexMap<String, CollectionDef>,
}

/// A validated grammar.
///
/// Constructed once per build and never mutated afterwards. Every name the
/// walker or resolver looks up is guaranteed to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    module_prefix: String,
    types: IndexMap<String, TypeDef>,
    collections: IndexMap<String, CollectionDef>,
}

impl Grammar {
    /// Validate a module configuration and build the grammar.
    pub fn new(module_prefix: impl Into<String>, config: ModuleConfiguration) -> Result<Self> {
        let module_prefix = module_prefix.into();
        validate_prefix(&module_prefix)?;

        let ModuleConfiguration { types, collections } = config;

        for (name, def) in &types {
            if !collections.contains_key(&def.definitive_collection) {
                return Err(Error::invalid_with_help(
                    format!(
                        "type '{}' names unknown definitive collection '{}'",
                        name, def.definitive_collection
                    ),
                    known("collections", collections.keys()),
                ));
            }
        }

        for (name, def) in &collections {
            for ty in &def.types {
                if !types.contains_key(ty) {
                    return Err(Error::invalid_with_help(
                        format!("collection '{}' lists unknown type '{}'", name, ty),
                        known("types", types.keys()),
                    ));
                }
            }

            if let Some(default) = &def.default_type {
                if !def.types.contains(default) {
                    return Err(Error::invalid(format!(
                        "default type '{}' of collection '{}' is not one of its types",
                        default, name
                    )));
                }
            }

            for private in &def.private_collections {
                if !collections.contains_key(private) {
                    return Err(Error::invalid_with_help(
                        format!(
                            "collection '{}' lists unknown private collection '{}'",
                            name, private
                        ),
                        known("collections", collections.keys()),
                    ));
                }
            }
        }

        Ok(Self {
            module_prefix,
            types,
            collections,
        })
    }

    /// The namespace prepended to every specifier.
    pub fn module_prefix(&self) -> &str {
        &self.module_prefix
    }

    pub fn types(&self) -> &IndexMap<String, TypeDef> {
        &self.types
    }

    pub fn collections(&self) -> &IndexMap<String, CollectionDef> {
        &self.collections
    }

    /// Look up a collection by name.
    pub fn collection(&self, name: &str) -> Option<&CollectionDef> {
        self.collections.get(name)
    }

    /// The definitive collection of a type.
    pub fn collection_for(&self, type_name: &str) -> Option<&CollectionDef> {
        self.types
            .get(type_name)
            .and_then(|def| self.collections.get(&def.definitive_collection))
    }

    /// Check if `collection` is declared private inside `parent`.
    pub fn is_private(&self, collection: &str, parent: &str) -> bool {
        self.collections
            .get(parent)
            .is_some_and(|def| def.private_collections.contains(collection))
    }

    /// Check if a directory name is the group of any collection.
    pub fn is_group(&self, name: &str) -> bool {
        self.collections
            .values()
            .any(|def| def.group.as_deref() == Some(name))
    }
}

fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(Error::invalid("module prefix is empty"));
    }
    if prefix.contains('/') || prefix.contains(':') {
        return Err(Error::invalid_with_help(
            format!("module prefix '{}' contains a reserved character", prefix),
            "the prefix is a single namespace segment; remove any '/' or ':'",
        ));
    }
    Ok(())
}

fn known<'a>(kind: &str, names: impl Iterator<Item = &'a String>) -> String {
    let names: Vec<&str> = names.map(String::as_str).collect();
    if names.is_empty() {
        format!("no {} are defined", kind)
    } else {
        format!("known {}: {}", kind, names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> ModuleConfiguration {
        serde_json::from_str(json).expect("Failed to parse test configuration")
    }

    fn fixture_config() -> ModuleConfiguration {
        config(
            r#"{
                "types": {
                    "application": { "definitiveCollection": "main" },
                    "component": { "definitiveCollection": "components" },
                    "renderer": { "definitiveCollection": "main" },
                    "template": { "definitiveCollection": "components" },
                    "util": { "definitiveCollection": "utils" }
                },
                "collections": {
                    "main": { "types": ["application", "renderer"] },
                    "components": {
                        "group": "ui",
                        "types": ["component", "template"],
                        "defaultType": "component",
                        "privateCollections": ["utils"]
                    },
                    "utils": { "unresolvable": true }
                }
            }"#,
        )
    }

    fn invalid_message(err: Box<Error>) -> String {
        match *err {
            Error::Invalid { message, .. } => message,
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_grammar_lookups() {
        let grammar = Grammar::new("my-app", fixture_config()).unwrap();

        assert_eq!(grammar.module_prefix(), "my-app");
        assert!(grammar.types().contains_key("component"));
        assert!(grammar.is_group("ui"));
        assert!(!grammar.is_group("components"));
        assert!(grammar.is_private("utils", "components"));
        assert!(!grammar.is_private("components", "utils"));

        let components = grammar.collection_for("template").unwrap();
        assert_eq!(components.default_type.as_deref(), Some("component"));
    }

    #[test]
    fn test_unknown_definitive_collection() {
        let cfg = config(r#"{ "types": { "component": { "definitiveCollection": "nope" } } }"#);
        let message = invalid_message(Grammar::new("app", cfg).unwrap_err());
        assert!(message.contains("unknown definitive collection 'nope'"));
    }

    #[test]
    fn test_unknown_collection_type() {
        let cfg = config(r#"{ "collections": { "components": { "types": ["widget"] } } }"#);
        let message = invalid_message(Grammar::new("app", cfg).unwrap_err());
        assert!(message.contains("unknown type 'widget'"));
    }

    #[test]
    fn test_default_type_must_be_member() {
        let cfg = config(
            r#"{
                "types": {
                    "component": { "definitiveCollection": "components" },
                    "util": { "definitiveCollection": "components" }
                },
                "collections": {
                    "components": { "types": ["component"], "defaultType": "util" }
                }
            }"#,
        );
        let message = invalid_message(Grammar::new("app", cfg).unwrap_err());
        assert!(message.contains("default type 'util'"));
    }

    #[test]
    fn test_unknown_private_collection() {
        let cfg = config(r#"{ "collections": { "components": { "privateCollections": ["x"] } } }"#);
        let message = invalid_message(Grammar::new("app", cfg).unwrap_err());
        assert!(message.contains("unknown private collection 'x'"));
    }

    #[test]
    fn test_prefix_validation() {
        assert!(Grammar::new("", ModuleConfiguration::default()).is_err());
        assert!(Grammar::new("a/b", ModuleConfiguration::default()).is_err());
        assert!(Grammar::new("app", ModuleConfiguration::default()).is_ok());
    }

    #[test]
    fn test_collection_serializes_compactly() {
        let def = CollectionDef {
            unresolvable: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&def).unwrap();
        assert_eq!(json, r#"{"types":[],"unresolvable":true}"#);
    }
}
