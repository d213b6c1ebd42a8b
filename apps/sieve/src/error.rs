//! Errors surfaced by the CLI commands.

use sieve_core::SieveError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog or expression file could not be parsed.
    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: SieveError,
    },

    /// A `--where` term was rejected.
    #[error(transparent)]
    Spec(#[from] SieveError),

    /// Refused to overwrite an existing file.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: SieveError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
