//! Driver failures that stop before any analysis runs.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("{0}")]
    Usage(String),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}
