//! TypeScript interface builder.

use crate::builder::{CodeFragment, Renderable};

/// Builder for exported TypeScript interfaces.
///
/// Field names are emitted as given, so callers quote keys that are not
/// valid identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    fields: Vec<(String, String)>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::Line(format!(
                "export interface {} {{}}",
                self.name
            ))];
        }

        vec![CodeFragment::Block {
            header: format!("export interface {} {{", self.name),
            body: self
                .fields
                .iter()
                .map(|(name, ty)| CodeFragment::Line(format!("{}: {};", name, ty)))
                .collect(),
            close: Some("}".to_string()),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn render(interface: &Interface) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(interface);
        builder.build()
    }

    #[test]
    fn test_empty_interface() {
        assert_eq!(
            render(&Interface::new("ModuleMap")),
            "export interface ModuleMap {}\n"
        );
    }

    #[test]
    fn test_interface_with_quoted_fields() {
        let i = Interface::new("ModuleMap")
            .field("\"component:/app/components/a\"", "unknown")
            .field("\"template:/app/components/a\"", "unknown");
        assert_eq!(
            render(&i),
            "export interface ModuleMap {\n  \"component:/app/components/a\": unknown;\n  \"template:/app/components/a\": unknown;\n}\n"
        );
    }
}
