// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandsphereError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed dataset: {source} (path: {path})")]
    Csv {
        source: csv::Error,
        path: PathBuf,
    },

    #[error("Invalid config: {source} (path: {path})")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, LandsphereError>;

// Allow `?` on std::io::Error by converting to LandsphereError::Io with unknown path.
impl From<std::io::Error> for LandsphereError {
    fn from(source: std::io::Error) -> Self {
        LandsphereError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Readers without a backing file (stdin, in-memory buffers) report this path.
impl From<csv::Error> for LandsphereError {
    fn from(source: csv::Error) -> Self {
        LandsphereError::Csv {
            source,
            path: PathBuf::from("<memory>"),
        }
    }
}

impl LandsphereError {
    /// True when the failure came from the input data rather than the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Csv { .. } | Self::Config { .. })
    }
}
