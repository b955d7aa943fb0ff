use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for a full build
pub type Result<T> = std::result::Result<T, Error>;

/// Any failure of a build. Every variant is fatal.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(resmap_grammar::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] resmap_resolve::Error),

    #[error("failed to write the module map into '{}'", .output.display())]
    #[diagnostic(
        code(resmap::emit),
        help("no artifact was published; check that the output directory is writable")
    )]
    Emit {
        output: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl From<Box<resmap_grammar::Error>> for Error {
    fn from(err: Box<resmap_grammar::Error>) -> Self {
        Error::Config(*err)
    }
}
