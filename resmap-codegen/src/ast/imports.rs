//! ES module import statements.

use resmap_core::quote;

use crate::builder::{CodeFragment, Renderable};

/// Builder for import statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    from: String,
    default: Option<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    fn statement(&self) -> String {
        let from = quote(&self.from);
        match &self.default {
            Some(def) => format!("import {} from {};", def, from),
            None => format!("import {};", from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        let i = Import::new("../ui/components/my-app/component").default("__a__");
        assert_eq!(
            i.statement(),
            "import __a__ from \"../ui/components/my-app/component\";"
        );
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(Import::new("./polyfill").statement(), "import \"./polyfill\";");
    }

    #[test]
    fn test_path_is_escaped() {
        let i = Import::new("../we\"ird").default("x");
        assert_eq!(i.statement(), "import x from \"../we\\\"ird\";");
    }
}
