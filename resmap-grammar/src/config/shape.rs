//! The two accepted JSON layouts of a configuration file.

use serde::Deserialize;
use serde_json::Value;

use crate::ModuleConfiguration;

/// Key that marks the nested layout.
pub const NESTED_KEY: &str = "moduleConfiguration";

/// Keys that carry a grammar in the flat layout.
const FLAT_KEYS: [&str; 2] = ["types", "collections"];

/// A configuration file as written on disk.
///
/// ```json
/// { "modulePrefix": "my-app", "types": {}, "collections": {} }
/// ```
///
/// or, nested one level:
///
/// ```json
/// { "modulePrefix": "my-app", "moduleConfiguration": { "types": {}, "collections": {} } }
/// ```
///
/// A flat file with neither `types` nor `collections` carries no grammar at
/// all, and its configuration is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigShape {
    Flat {
        module_prefix: Option<String>,
        configuration: Option<ModuleConfiguration>,
    },
    Nested {
        module_prefix: Option<String>,
        configuration: ModuleConfiguration,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlatFile {
    #[serde(default)]
    module_prefix: Option<String>,
    #[serde(flatten)]
    configuration: ModuleConfiguration,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NestedFile {
    #[serde(default)]
    module_prefix: Option<String>,
    module_configuration: ModuleConfiguration,
}

impl ConfigShape {
    /// Decide the layout of an already parsed document.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        let nested = value.get(NESTED_KEY).is_some();

        if nested {
            let file: NestedFile = serde_json::from_value(value)?;
            Ok(Self::Nested {
                module_prefix: file.module_prefix,
                configuration: file.module_configuration,
            })
        } else {
            let has_grammar = FLAT_KEYS.iter().any(|key| value.get(key).is_some());
            let file: FlatFile = serde_json::from_value(value)?;
            Ok(Self::Flat {
                module_prefix: file.module_prefix,
                configuration: has_grammar.then_some(file.configuration),
            })
        }
    }

    /// Collapse either layout into a prefix and a configuration, if any.
    pub fn normalize(self) -> (Option<String>, Option<ModuleConfiguration>) {
        match self {
            Self::Flat {
                module_prefix,
                configuration,
            } => (module_prefix, configuration),
            Self::Nested {
                module_prefix,
                configuration,
            } => (module_prefix, Some(configuration)),
        }
    }
}
