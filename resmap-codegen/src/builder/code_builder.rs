//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building indented code.
///
/// # Example
///
/// ```
/// use resmap_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("const moduleMap = {")
///     .push_indent()
///     .push_line("\"a\": __a__,")
///     .push_dedent()
///     .push_line("};");
///
/// assert_eq!(builder.build(), "const moduleMap = {\n  \"a\": __a__,\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("export interface ModuleMap {")
            .push_indent()
            .push_line("\"a\": unknown;")
            .push_dedent()
            .push_line("}");
        assert_eq!(
            builder.build(),
            "export interface ModuleMap {\n  \"a\": unknown;\n}\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_emit_nested_blocks() {
        struct Nested;
        impl Renderable for Nested {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::line("// generated"),
                    CodeFragment::block(
                        "const a = {",
                        vec![CodeFragment::block(
                            "b: {",
                            vec![CodeFragment::line("c: 1,")],
                            Some("},".to_string()),
                        )],
                        Some("};".to_string()),
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&Nested);
        assert_eq!(
            builder.build(),
            "// generated\nconst a = {\n  b: {\n    c: 1,\n  },\n};\n"
        );
    }

    #[test]
    fn test_blank_has_no_indent() {
        let mut builder = CodeBuilder::typescript();
        builder.push_indent().push_blank().push_line("x");
        assert_eq!(builder.build(), "\n  x\n");
    }
}
