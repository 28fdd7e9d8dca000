use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// Sampling and snapshot projection are total, so the only fallible paths
/// are configuration and the filesystem around it.
#[derive(Debug, Error)]
pub enum FloeError {
    #[error("config error: {0}")]
    Config(String),

    #[error("watch error: {0}")]
    Watch(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = FloeError> = std::result::Result<T, E>;
