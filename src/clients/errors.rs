use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the Genius client, the lyric scraper and the writer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No lyrics found at {0}")]
    NoLyrics(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::Configuration(err.to_string())
    }
}
