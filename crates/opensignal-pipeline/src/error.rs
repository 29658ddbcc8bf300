use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("transport error: {0}")]
    Transport(#[from] opensignal_transport::TransportError),

    #[error("rule error: {0}")]
    Rules(#[from] opensignal_rules::RuleError),

    #[error("sink error: {0}")]
    Sink(#[from] opensignal_sink::SinkError),

    #[error("failed to write brief to {path}: {source}")]
    Brief {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("event collector lock poisoned: {0}")]
    LockPoisoned(String),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
