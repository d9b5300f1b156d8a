//! Error types for the command-line front end.
//!
//! A SQL syntax error is not an error here: it is a regular outcome whose
//! diagnostic is printed like any other result.

/// Errors that stop the command before any result is written.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading the input or writing the result failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON request could not be decoded, or the response encoded.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the command-line front end.
pub type Result<T> = std::result::Result<T, CliError>;
