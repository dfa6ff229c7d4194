use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every failure the pipeline can produce, split by originating stage so
/// callers can tell "source unreachable" apart from "malformed row".
#[derive(Debug, Error)]
pub enum AppError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("database error: {0}")]
    Database(#[from] tokio_rusqlite::Error),

    #[error("invalid identifier: {0}")]
    Identifier(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
