use std::path::PathBuf;

use miette::Diagnostic;
use resmap_core::{ModulePath, Specifier};
use thiserror::Error;

/// Result type for walking and resolution
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot read source root '{path}'")]
    #[diagnostic(
        code(resmap::root_unreadable),
        help("check that the root directory exists and that the base directory, if any, is correct")
    )]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(resmap::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("specifier '{specifier}' resolves to two different modules")]
    #[diagnostic(
        code(resmap::specifier_conflict),
        help("'{first}' and '{second}' both claim it; rename or remove one of them")
    )]
    SpecifierConflict {
        specifier: Specifier,
        first: ModulePath,
        second: ModulePath,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
