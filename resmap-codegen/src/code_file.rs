//! Structured JavaScript/TypeScript file generation.

use crate::{
    ast::{Export, Import},
    builder::{CodeBuilder, CodeFragment, Renderable},
};

/// A file organised into imports, body and exports.
///
/// Sections render in that order, separated by blank lines, with a blank
/// line between consecutive body elements.
///
/// # Example
///
/// ```ignore
/// let code = CodeFile::new()
///     .imports([Import::new("../ui/components/my-app/component").default("__a__")])
///     .add(Const::object("moduleMap", object))
///     .export(Export::new().default("moduleMap"))
///     .render();
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && (!self.body.is_empty() || !self.exports.is_empty()) {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        if !self.body.is_empty() && !self.exports.is_empty() {
            builder.push_blank();
        }

        for export in &self.exports {
            builder.emit(export);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Const;

    #[test]
    fn test_empty_file() {
        assert_eq!(CodeFile::new().render(), "");
    }

    #[test]
    fn test_section_spacing() {
        let code = CodeFile::new()
            .imports([
                Import::new("./a").default("a"),
                Import::new("./b").default("b"),
            ])
            .add(Const::declare("x", "A"))
            .add(Const::declare("y", "B"))
            .export(Export::new().default("x"))
            .render();

        insta::assert_snapshot!(code, @r###"
        import a from "./a";
        import b from "./b";

        declare const x: A;

        declare const y: B;

        export default x;
        "###);
    }

    #[test]
    fn test_exports_follow_imports_directly_without_body() {
        let code = CodeFile::new()
            .imports([Import::new("./a").default("a")])
            .export(Export::new().default("a"))
            .render();
        assert_eq!(code, "import a from \"./a\";\n\nexport default a;\n");
    }
}
