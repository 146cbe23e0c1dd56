use thiserror::Error;

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Everything that can go wrong while driving a GraphDB import.
///
/// The first six variants map one-to-one onto the steps of the import
/// sequence; the rest are ambient transport and serialization failures.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Authentication failed (HTTP {status}): wrong username/password")]
    Authentication { status: u16 },

    #[error("Failed to upload file '{name}' (HTTP {status}): {message}")]
    Upload {
        name: String,
        status: u16,
        message: String,
    },

    #[error("Failed to start import '{name}' (HTTP {status}): {message}")]
    ImportStart {
        name: String,
        status: u16,
        message: String,
    },

    #[error("Cannot find the import: {0}")]
    ImportNotFound(String),

    #[error("Import '{name}' failed: {message}")]
    ImportFailed { name: String, message: String },

    #[error("Failed to remove import history for '{name}' (HTTP {status})")]
    Cleanup { name: String, status: u16 },

    #[error("Unexpected server response: {0}")]
    InvalidResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
