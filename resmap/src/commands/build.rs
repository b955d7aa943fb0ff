use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{SourceArgs, UnwrapOrExit};
use crate::{
    ops::{self, BuildOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output root; artifacts land in <OUTPUT>/config/
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildCommand {
    pub fn run(&self) -> Result<()> {
        let mut builder = self.source.builder()?;

        let report = ops::build(
            &mut builder,
            BuildOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )
        .unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
