//! Classification of directory entries and the walker's output tuple.

use resmap_core::ModulePath;

/// Names starting with this character are skipped and never descended into.
pub const IGNORE_SENTINEL: char = '-';

/// Type implied by a markup file.
pub const MARKUP_TYPE: &str = "template";

const SOURCE_EXTENSIONS: &[&str] = &["ts", "js"];
const MARKUP_EXTENSIONS: &[&str] = &["hbs"];
const DECLARATION_SUFFIX: &str = ".d.ts";

/// What a recognised file contributes to its unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Script module (`.ts`, `.js`).
    Source,
    /// Template markup (`.hbs`).
    Markup,
}

/// Check if an entry is excluded from the walk.
pub fn is_ignored(name: &str) -> bool {
    name.starts_with(IGNORE_SENTINEL) || name.starts_with('.')
}

/// Split a file name into its stem and kind.
///
/// Returns `None` for declaration stubs and unrecognised extensions.
pub fn classify_file(name: &str) -> Option<(&str, FileKind)> {
    if name.ends_with(DECLARATION_SUFFIX) {
        return None;
    }

    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }

    if SOURCE_EXTENSIONS.contains(&ext) {
        Some((stem, FileKind::Source))
    } else if MARKUP_EXTENSIONS.contains(&ext) {
        Some((stem, FileKind::Markup))
    } else {
        None
    }
}

/// Module path of a recognised file: source modules drop the extension.
pub fn module_path(dirs: &[String], name: &str, stem: &str, kind: FileKind) -> ModulePath {
    match kind {
        FileKind::Source => ModulePath::from_segments(dirs, stem),
        FileKind::Markup => ModulePath::from_segments(dirs, name),
    }
}

/// The kind of evidence a file gives about its unit's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalKind {
    /// A file named after a type inside a unit directory (`component.ts`).
    Marker(String),
    /// A source file named after the unit itself (`titleize.ts`).
    Source,
    /// A markup file named after the unit itself (`text-editor.hbs`).
    Markup,
}

impl From<FileKind> for SignalKind {
    fn from(kind: FileKind) -> Self {
        match kind {
            FileKind::Source => Self::Source,
            FileKind::Markup => Self::Markup,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSignal {
    pub kind: SignalKind,
    pub module: ModulePath,
}

/// A unit found by the walker, with everything needed to name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredUnit {
    /// Local identifier (directory name or file stem).
    pub name: String,
    /// The collection that owns the unit.
    pub collection: String,
    /// The group the walk entered, if any.
    pub group: Option<String>,
    /// Specifier segments before the unit name, starting with the collection.
    pub namespace: Vec<String>,
    /// False for units inside an unresolvable collection.
    pub resolvable: bool,
    pub signals: Vec<TypeSignal>,
}

impl DiscoveredUnit {
    /// Namespace segments followed by the unit name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.namespace
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.name.as_str()))
    }
}
