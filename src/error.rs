use thiserror::Error;

/// Main error type for famtree
#[derive(Error, Debug)]
pub enum FamtreeError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON data file errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML data file errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data file with an extension no loader understands
    #[error("Unsupported data format: {0}")]
    UnsupportedFormat(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using FamtreeError
pub type Result<T> = std::result::Result<T, FamtreeError>;
