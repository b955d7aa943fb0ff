//! ES module export statements.

use crate::builder::{CodeFragment, Renderable};

/// Builder for export statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Export {
    default: Option<String>,
}

impl Export {
    pub fn new() -> Self {
        Self { default: None }
    }

    /// Export as default.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.default
            .as_ref()
            .map(|def| CodeFragment::Line(format!("export default {};", def)))
            .into_iter()
            .collect()
    }
}
