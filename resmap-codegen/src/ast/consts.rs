//! `const` declarations.

use super::objects::JsObject;
use crate::builder::{CodeFragment, Renderable};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Initializer {
    /// `declare const x: T;`
    Declared,
    Object(JsObject),
}

/// Builder for const declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const {
    name: String,
    ty: Option<String>,
    init: Initializer,
}

impl Const {
    /// `const name = { ... };`
    pub fn object(name: impl Into<String>, value: JsObject) -> Self {
        Self::with(name, Initializer::Object(value))
    }

    /// Ambient `declare const name: ty;`, for declaration files.
    pub fn declare(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self::with(name, Initializer::Declared).ty(ty)
    }

    fn with(name: impl Into<String>, init: Initializer) -> Self {
        Self {
            name: name.into(),
            ty: None,
            init,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let ty = self
            .ty
            .as_ref()
            .map(|ty| format!(": {}", ty))
            .unwrap_or_default();

        match &self.init {
            Initializer::Declared => vec![CodeFragment::Line(format!(
                "declare const {}{};",
                self.name, ty
            ))],
            Initializer::Object(obj) => {
                obj.to_fragments_with(&format!("const {}{} = ", self.name, ty), ";")
            }
        }
    }
}
