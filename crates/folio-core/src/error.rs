//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
///
/// Form validation failures are not errors; they are reported as
/// [`crate::form::ValidationErrors`] values.
#[derive(Error, Debug)]
pub enum FolioError {
    /// A required page element was not found at startup
    #[error("Required element missing: {0}")]
    MissingElement(String),

    /// A section identifier that is not part of the page
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Theme preference could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// The rendering surface rejected an update
    #[error("DOM error: {0}")]
    Dom(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
