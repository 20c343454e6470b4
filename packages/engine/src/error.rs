//! Error types for the MinElev document engine

use thiserror::Error;

/// Coarse classification of a [`DocumentError`].
///
/// Callers map this to a response status: validation and not-found errors are
/// caused by the caller's input, integrity and internal errors are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raw content is missing a field, has the wrong type or fails a format check
    Validation,
    /// A referenced id has no matching catalog or student entry
    NotFound,
    /// A resolved upstream record lacks fields it is guaranteed to have
    Integrity,
    /// Configuration, embedded data or serialization failure
    Internal,
}

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Raw content failed a business validation rule
    #[error("Invalid content at '{field}': {message}")]
    Validation { field: String, message: String },

    /// A referenced id was not found in a catalog or in the student snapshot
    #[error("Could not find {collection} with id \"{id}\"")]
    NotFound { collection: String, id: String },

    /// A resolved record is missing required sub-fields
    #[error("Integrity error in {collection} \"{id}\": missing {missing}")]
    Integrity {
        collection: String,
        id: String,
        missing: String,
    },

    /// No document type registered under the given id
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    /// A template value cannot be turned into a schema
    #[error("Invalid template at '{path}': {message}")]
    InvalidTemplate { path: String, message: String },

    /// Embedded catalog data is inconsistent
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid runtime configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),
}

impl DocumentError {
    /// Build a validation error for the given field path.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DocumentError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build a not-found error for an id looked up in `collection`.
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        DocumentError::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Build an integrity error for a record missing `missing`.
    pub fn integrity(
        collection: impl Into<String>,
        id: impl Into<String>,
        missing: impl Into<String>,
    ) -> Self {
        DocumentError::Integrity {
            collection: collection.into(),
            id: id.into(),
            missing: missing.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DocumentError::Validation { .. } => ErrorKind::Validation,
            DocumentError::NotFound { .. } | DocumentError::UnknownDocumentType(_) => {
                ErrorKind::NotFound
            }
            DocumentError::Integrity { .. } => ErrorKind::Integrity,
            DocumentError::InvalidTemplate { .. }
            | DocumentError::Catalog(_)
            | DocumentError::Config(_)
            | DocumentError::JsonError(_)
            | DocumentError::YamlError(_) => ErrorKind::Internal,
        }
    }

    /// HTTP status an outer layer should answer with.
    ///
    /// Not-found references inside content are a bad request from the caller;
    /// only an unknown document type maps to 404.
    pub fn status_code(&self) -> u16 {
        match self {
            DocumentError::UnknownDocumentType(_) => 404,
            _ => match self.kind() {
                ErrorKind::Validation | ErrorKind::NotFound => 400,
                ErrorKind::Integrity | ErrorKind::Internal => 500,
            },
        }
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, DocumentError>;
