use std::path::PathBuf;

use resmap_grammar::ModuleConfiguration;
use serde::{Deserialize, Serialize};

/// Options accepted by [`ResolutionMapBuilder`](crate::ResolutionMapBuilder).
///
/// Field names follow the camelCase JSON convention, so options can be read
/// straight from a build tool's configuration:
///
/// ```
/// use resmap::BuilderOptions;
///
/// let options: BuilderOptions = serde_json::from_str(
///     r#"{ "configPath": "environment.json", "baseDir": "src", "logSpecifiers": true }"#,
/// )
/// .unwrap();
/// assert!(options.log_specifiers);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderOptions {
    /// Directory under the root where scanning starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,

    /// Config file name, relative to the config root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_module_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_module_configuration: Option<ModuleConfiguration>,

    /// Record the sorted specifier list on the builder after each build.
    pub log_specifiers: bool,
}

impl BuilderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn default_module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_module_prefix = Some(prefix.into());
        self
    }

    pub fn default_module_configuration(mut self, config: ModuleConfiguration) -> Self {
        self.default_module_configuration = Some(config);
        self
    }

    pub fn log_specifiers(mut self, enabled: bool) -> Self {
        self.log_specifiers = enabled;
        self
    }
}
