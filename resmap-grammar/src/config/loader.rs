//! Loading a grammar from a config file, falling back to caller defaults.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use super::ConfigShape;
use crate::{Error, Grammar, ModuleConfiguration, Result, error::SourceContext};

/// Where a loaded grammar came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// Built from the caller-supplied defaults.
    Defaults,
}

/// A validated grammar together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub grammar: Grammar,
    pub source: ConfigSource,
}

/// Resolves the grammar for one build.
///
/// # Example
///
/// ```ignore
/// let loaded = ConfigLoader::new("config")
///     .config_path("environment.json")
///     .default_module_prefix("my-app")
///     .load()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_root: PathBuf,
    config_path: Option<PathBuf>,
    default_module_prefix: Option<String>,
    default_module_configuration: Option<ModuleConfiguration>,
}

impl ConfigLoader {
    /// Create a loader resolving config paths against `config_root`.
    pub fn new(config_root: impl Into<PathBuf>) -> Self {
        Self {
            config_root: config_root.into(),
            ..Default::default()
        }
    }

    /// Relative name of the config file.
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Prefix used when the file is absent or does not name one.
    pub fn default_module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_module_prefix = Some(prefix.into());
        self
    }

    /// Configuration used when the file is absent.
    pub fn default_module_configuration(mut self, config: ModuleConfiguration) -> Self {
        self.default_module_configuration = Some(config);
        self
    }

    /// Set every optional input at once.
    pub fn with_options(
        mut self,
        config_path: Option<PathBuf>,
        default_module_prefix: Option<String>,
        default_module_configuration: Option<ModuleConfiguration>,
    ) -> Self {
        self.config_path = config_path;
        self.default_module_prefix = default_module_prefix;
        self.default_module_configuration = default_module_configuration;
        self
    }

    /// Full path of the config file, if one was named.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.config_path.as_ref().map(|p| self.config_root.join(p))
    }

    /// Load and validate the grammar.
    pub fn load(&self) -> Result<LoadedConfig> {
        if let Some(path) = self.resolved_path() {
            if let Some(content) = read_optional(&path)? {
                tracing::debug!(path = %path.display(), "loading module configuration");
                let grammar = self.grammar_from_content(&content, &path)?;
                return Ok(LoadedConfig {
                    grammar,
                    source: ConfigSource::File(path),
                });
            }
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
        }

        let grammar = self.grammar_from_defaults()?;
        Ok(LoadedConfig {
            grammar,
            source: ConfigSource::Defaults,
        })
    }

    fn grammar_from_content(&self, content: &str, path: &Path) -> Result<Grammar> {
        let source_ctx = SourceContext::new(content, path.display().to_string());

        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
        let shape = ConfigShape::from_value(value).map_err(|e| source_ctx.parse_error(e))?;
        let (prefix, configuration) = shape.normalize();

        let prefix = prefix
            .or_else(|| self.default_module_prefix.clone())
            .ok_or_else(|| {
                Error::missing(format!(
                    "'{}' has no modulePrefix and no default prefix was given",
                    path.display()
                ))
            })?;

        let configuration = match configuration {
            Some(configuration) => configuration,
            None => {
                tracing::debug!(
                    path = %path.display(),
                    "config file has no module configuration, using defaults"
                );
                self.default_module_configuration.clone().ok_or_else(|| {
                    Error::missing(format!(
                        "'{}' has no module configuration and no default configuration was given",
                        path.display()
                    ))
                })?
            }
        };

        Grammar::new(prefix, configuration)
    }

    fn grammar_from_defaults(&self) -> Result<Grammar> {
        let location = match self.resolved_path() {
            Some(path) => format!("'{}' does not exist", path.display()),
            None => "no config file was named".to_string(),
        };

        match (
            &self.default_module_prefix,
            &self.default_module_configuration,
        ) {
            (Some(prefix), Some(config)) => Grammar::new(prefix.clone(), config.clone()),
            (None, Some(_)) => Err(Error::missing(format!(
                "{} and no default module prefix was given",
                location
            ))),
            (Some(_), None) => Err(Error::missing(format!(
                "{} and no default module configuration was given",
                location
            ))),
            (None, None) => Err(Error::missing(format!("{} and no defaults were given", location))),
        }
    }
}

/// Read a file, treating "not found" as absence rather than failure.
fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })),
    }
}
