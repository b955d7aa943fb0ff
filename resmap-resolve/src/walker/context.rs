//! Immutable traversal state passed down each recursive step.

use resmap_grammar::CollectionDef;

/// What kind of directory a frame is visiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// The scan root.
    Root,
    /// A group directory (e.g. `ui`).
    Group(String),
    /// A collection directory (e.g. `components`).
    Collection,
    /// A unit directory (e.g. `my-app`).
    Unit(String),
}

/// State of the walk at one directory.
///
/// Each `enter_*` returns a new context; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkContext {
    scope: Scope,
    group: Option<String>,
    collection: Option<String>,
    /// Specifier segments for members found at this level.
    namespace: Vec<String>,
    /// Specifier segments of the enclosing unit, before its own name.
    owner_namespace: Vec<String>,
    /// Filesystem segments from the supplied root.
    dirs: Vec<String>,
    resolvable: bool,
}

impl WalkContext {
    /// Context of the scan root, offset by the base directory segments.
    pub fn root(base: Vec<String>) -> Self {
        Self {
            scope: Scope::Root,
            group: None,
            collection: None,
            namespace: Vec::new(),
            owner_namespace: Vec::new(),
            dirs: base,
            resolvable: true,
        }
    }

    pub fn enter_group(&self, name: &str) -> Self {
        Self {
            scope: Scope::Group(name.to_string()),
            group: Some(name.to_string()),
            dirs: self.descend(name),
            ..self.clone()
        }
    }

    /// Enter a collection directory.
    ///
    /// A top-level collection starts the namespace. A private nested
    /// collection is transparent; a public one adds its own name.
    pub fn enter_collection(&self, name: &str, def: &CollectionDef, private: bool) -> Self {
        let namespace = if self.collection.is_none() {
            vec![name.to_string()]
        } else if private {
            self.namespace.clone()
        } else {
            let mut namespace = self.namespace.clone();
            namespace.push(name.to_string());
            namespace
        };

        Self {
            scope: Scope::Collection,
            collection: Some(name.to_string()),
            namespace,
            dirs: self.descend(name),
            resolvable: !def.unresolvable,
            ..self.clone()
        }
    }

    /// Enter a unit directory. Units of an unresolvable collection add no
    /// segment, so their descendants stay addressed from the nearest
    /// resolvable ancestor.
    pub fn enter_unit(&self, name: &str) -> Self {
        let mut namespace = self.namespace.clone();
        if self.resolvable {
            namespace.push(name.to_string());
        }

        Self {
            scope: Scope::Unit(name.to_string()),
            namespace,
            owner_namespace: self.namespace.clone(),
            dirs: self.descend(name),
            ..self.clone()
        }
    }

    fn descend(&self, name: &str) -> Vec<String> {
        let mut dirs = self.dirs.clone();
        dirs.push(name.to_string());
        dirs
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    pub fn owner_namespace(&self) -> &[String] {
        &self.owner_namespace
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn is_resolvable(&self) -> bool {
        self.resolvable
    }
}
