//! The build node: config, walk, resolve, emit.

use std::path::{Path, PathBuf};

use resmap_codegen::{Emitter, PreviewFile};
use resmap_grammar::{ConfigLoader, ConfigSource, Grammar, LoadedConfig};
use resmap_resolve::{ResolutionMap, resolve_tree};

use crate::{BuilderOptions, Error, Result};

/// What a completed build produced.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Where the grammar came from.
    pub source: ConfigSource,
    pub module_prefix: String,
    pub map: ResolutionMap,
    /// Artifact paths, empty for a preview.
    pub written: Vec<PathBuf>,
}

/// Generates the module map for one source tree.
///
/// Every call to [`build`](Self::build) reloads the configuration and
/// re-walks the tree; nothing is cached between builds.
///
/// # Example
///
/// ```ignore
/// let options = BuilderOptions::new()
///     .config_path("environment.json")
///     .log_specifiers(true);
/// let mut builder = ResolutionMapBuilder::new("app/src", "app/config", options);
/// builder.build(Path::new("dist"))?;
/// println!("{:?}", builder.specifiers);
/// ```
#[derive(Debug, Clone)]
pub struct ResolutionMapBuilder {
    root: PathBuf,
    config_root: PathBuf,
    options: BuilderOptions,
    /// Sorted specifiers of the last build, when `logSpecifiers` is set.
    pub specifiers: Option<Vec<String>>,
}

impl ResolutionMapBuilder {
    pub fn new(
        root: impl Into<PathBuf>,
        config_root: impl Into<PathBuf>,
        options: BuilderOptions,
    ) -> Self {
        Self {
            root: root.into(),
            config_root: config_root.into(),
            options,
            specifiers: None,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// The loader this builder's options describe.
    pub fn config_loader(&self) -> ConfigLoader {
        ConfigLoader::new(&self.config_root).with_options(
            self.options.config_path.clone(),
            self.options.default_module_prefix.clone(),
            self.options.default_module_configuration.clone(),
        )
    }

    /// Load and validate the grammar.
    pub fn load_config(&self) -> resmap_grammar::Result<LoadedConfig> {
        self.config_loader().load()
    }

    /// Walk the source tree and resolve every unit against `grammar`.
    pub fn resolve(&self, grammar: &Grammar) -> resmap_resolve::Result<ResolutionMap> {
        resolve_tree(grammar, &self.root, self.options.base_dir.as_deref())
    }

    /// Run a full build and publish both artifacts under `output`.
    ///
    /// Nothing is written unless configuration, walk and resolution all
    /// succeed.
    pub fn build(&mut self, output: &Path) -> Result<BuildOutcome> {
        let LoadedConfig { grammar, source } = self.load_config()?;
        let map = self.resolve(&grammar)?;

        let written = Emitter::new(&map)
            .generate(output)
            .map_err(|err| Error::Emit {
                output: output.to_path_buf(),
                source: err.into(),
            })?;

        self.record(&map);
        Ok(BuildOutcome {
            source,
            module_prefix: grammar.module_prefix().to_string(),
            map,
            written,
        })
    }

    /// Like [`build`](Self::build), but only renders the artifacts.
    pub fn preview(&mut self) -> Result<(BuildOutcome, Vec<PreviewFile>)> {
        let LoadedConfig { grammar, source } = self.load_config()?;
        let map = self.resolve(&grammar)?;
        let files = Emitter::new(&map).preview();

        self.record(&map);
        Ok((
            BuildOutcome {
                source,
                module_prefix: grammar.module_prefix().to_string(),
                map,
                written: Vec::new(),
            },
            files,
        ))
    }

    fn record(&mut self, map: &ResolutionMap) {
        if !self.options.log_specifiers {
            return;
        }

        let specifiers: Vec<String> = map
            .specifiers()
            .into_iter()
            .map(|s| s.as_str().to_string())
            .collect();
        for specifier in &specifiers {
            tracing::info!(%specifier, "resolved");
        }
        self.specifiers = Some(specifiers);
    }
}
