//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod build;
mod check;
mod list;
mod output;

pub use build::{BuildReport, BuildResult};
pub use check::CheckReport;
pub use list::ListReport;
pub use output::{Report, TerminalOutput};
