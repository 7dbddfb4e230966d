//! Error types for reading and writing design documents.

use thiserror::Error;

/// Errors that can occur while moving a design between bytes and the model.
///
/// Once a document has been parsed into an [`XmlDocument`](crate::xml::XmlDocument),
/// building the [`Design`](crate::model::Design) never fails: missing or malformed
/// sub-trees only produce default values.
#[derive(Debug, Error)]
pub enum DesignError {
    /// XML parsing or serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Input bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document root is not `ipxact:design`.
    #[error("Unexpected root element: expected ipxact:design, found {found}")]
    UnexpectedRoot { found: String },
}

impl DesignError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create an encoding error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding(message.into())
    }

    /// Create an unexpected root error.
    pub fn unexpected_root(found: impl Into<String>) -> Self {
        Self::UnexpectedRoot {
            found: found.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DesignError>;
