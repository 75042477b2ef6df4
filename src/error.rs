use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("{0}")]
    Validation(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApplyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a configuration problem rather than an I/O failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
