//! JavaScript object literal builder.

use crate::builder::CodeFragment;

/// A `key: value` pair in an object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: String,
}

/// Builder for object literals.
///
/// Keys and values are raw expressions; quote string keys before adding
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Render as the right-hand side of `prefix`, closing with `suffix`.
    ///
    /// An empty object collapses to a single `prefix{}suffix` line.
    pub fn to_fragments_with(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Line(format!("{}{{}}{}", prefix, suffix))];
        }

        let body = self
            .properties
            .iter()
            .map(|p| CodeFragment::Line(format!("{}: {},", p.key, p.value)))
            .collect();
        vec![CodeFragment::block(
            format!("{}{{", prefix),
            body,
            Some(format!("}}{}", suffix)),
        )]
    }
}

impl<K, V> FromIterator<(K, V)> for JsObject
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |obj, (k, v)| obj.property(k, v))
    }
}
