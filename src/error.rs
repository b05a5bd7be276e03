//! Error types for the tictacbot crate

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the tictacbot crate
///
/// Detection failures come in two deliberately distinct kinds:
/// [`Error::Template`] means an asset is missing or unreadable (fatal, the
/// loop cannot recover without operator intervention), while
/// [`Error::LowConfidence`] means the target is momentarily not visible on
/// screen (transient, the cycle is skipped and the loop continues).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("template '{name}' missing or unreadable at {path:?}: {message}")]
    Template {
        name: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("{target} not detected: peak score {score:.3} below threshold {threshold:.3}")]
    LowConfidence {
        target: &'static str,
        score: f64,
        threshold: f64,
    },

    #[error("pointer action at ({x}, {y}) failed: {message}")]
    Actuation { x: u32, y: u32, message: String },

    #[error("screen capture failed: {message}")]
    Capture { message: String },

    #[error("invalid grid geometry: {message}")]
    InvalidGeometry { message: String },

    #[error("invalid board string '{input}': {reason}")]
    InvalidBoard { input: String, reason: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stats serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the loop controller may continue after logging this error.
    ///
    /// Transient errors skip the current cycle; everything else aborts the
    /// loop, since retrying cannot succeed without operator intervention.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::LowConfidence { .. } | Error::Actuation { .. })
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
