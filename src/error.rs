//! Error types for termspin.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{what} size {width}x{height} is out of range")]
    InvalidDimensions {
        what: &'static str,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
