//! Fundamental value types shared by the walker, resolver and emitter.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// A canonical module specifier, e.g. `component:/my-app/components/my-app`.
///
/// Specifiers compare and sort by their string form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specifier(String);

impl Specifier {
    /// Compose a specifier from a type tag, the module prefix and the
    /// namespace segments leading to (and including) the unit name.
    ///
    /// ```
    /// use resmap_core::Specifier;
    ///
    /// let spec = Specifier::new("component", "my-app", ["components", "my-app"]);
    /// assert_eq!(spec.as_str(), "component:/my-app/components/my-app");
    /// ```
    pub fn new<I, S>(type_name: &str, prefix: &str, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = format!("{}:/{}", type_name, prefix);
        for segment in segments {
            out.push('/');
            out.push_str(segment.as_ref());
        }
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Specifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Specifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A module path relative to the scan root, always `/`-separated.
///
/// Source modules carry no extension (`ui/components/my-app/component`);
/// markup modules keep theirs (`ui/components/text-editor.hbs`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulePath(String);

impl ModulePath {
    /// Build a module path from directory segments and a final file name.
    pub fn from_segments<I, S>(dirs: I, file: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parts: Vec<String> = dirs.into_iter().map(|s| s.as_ref().to_string()).collect();
        parts.push(file.to_string());
        Self(parts.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Import path as seen from the `config/` output directory.
    pub fn import_path(&self) -> String {
        format!("../{}", self.0)
    }
}

impl From<&str> for ModulePath {
    fn from(value: &str) -> Self {
        Self(value.trim_matches('/').replace('\\', "/"))
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
