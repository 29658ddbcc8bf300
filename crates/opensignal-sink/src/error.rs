use std::io;
use std::path::PathBuf;

/// Errors produced by event sinks.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The target could not be opened, written, or read.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An event could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A line of an NDJSON file is not a valid event.
    #[error("malformed record at {path}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory sink lock was poisoned.
    #[error("sink lock poisoned: {0}")]
    LockPoisoned(String),
}

impl SinkError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the sink crate.
pub type Result<T> = std::result::Result<T, SinkError>;
