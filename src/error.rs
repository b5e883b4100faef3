use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Scrobble file could not be parsed as CSV
    #[error("Scrobble file error: {0}")]
    Csv(#[from] csv::Error),

    /// Scrobble file is missing required columns
    #[error("The file is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Metadata cache could not be serialized
    #[error("Cache error: {0}")]
    Json(#[from] serde_json::Error),

    /// Remote metadata service error
    #[error("Lookup error: {0}")]
    Lookup(#[from] reqwest::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
