use clap::Args;
use eyre::Result;

use super::SourceArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (loaded, map) = self.source.resolve()?;

        let report = ops::check(&loaded, &map);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
