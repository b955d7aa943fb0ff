mod build;
mod check;
mod completions;
mod list;

use std::path::PathBuf;

use build::BuildCommand;
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Context, Result};
use list::ListCommand;
use resmap::{BuilderOptions, LoadedConfig, ModuleConfiguration, ResolutionMap, ResolutionMapBuilder};

/// Extension trait for exiting on typed errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for resmap_grammar::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for resmap_resolve::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for resmap::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "resmap")]
#[command(version)]
#[command(about = "Generate a static module map from a component source tree")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Build(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate config/module-map.d.ts and config/module-map.js
    Build(BuildCommand),

    /// Validate the configuration and resolve the tree without writing
    Check(CheckCommand),

    /// List resolved specifiers and their modules
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where to scan and how to find the grammar. Shared by every command that
/// resolves a tree.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Source root to scan
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Directory config paths are resolved against
    #[arg(long, default_value = "config")]
    pub config_root: PathBuf,

    /// Config file name, relative to --config-root
    #[arg(short, long, default_value = "environment.json")]
    pub config: PathBuf,

    /// Start scanning at this directory under --root
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Module prefix used when the config file does not name one
    #[arg(long)]
    pub module_prefix: Option<String>,

    /// Module configuration (JSON) used when the config file is absent
    #[arg(long, value_name = "JSON")]
    pub default_config: Option<String>,
}

impl SourceArgs {
    pub fn builder(&self) -> Result<ResolutionMapBuilder> {
        let mut options = BuilderOptions::new().config_path(&self.config);

        if let Some(dir) = &self.base_dir {
            options = options.base_dir(dir);
        }
        if let Some(prefix) = &self.module_prefix {
            options = options.default_module_prefix(prefix);
        }
        if let Some(json) = &self.default_config {
            let config: ModuleConfiguration =
                serde_json::from_str(json).wrap_err("invalid --default-config JSON")?;
            options = options.default_module_configuration(config);
        }

        Ok(ResolutionMapBuilder::new(
            &self.root,
            &self.config_root,
            options,
        ))
    }

    /// Load the grammar and resolve the tree, exiting with a diagnostic on
    /// failure.
    pub fn resolve(&self) -> Result<(LoadedConfig, ResolutionMap)> {
        let builder = self.builder()?;
        let loaded = builder.load_config().unwrap_or_exit();
        let map = builder.resolve(&loaded.grammar).unwrap_or_exit();
        Ok((loaded, map))
    }
}
