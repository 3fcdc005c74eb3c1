//! Error types for braille table operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using BrailleTableError.
pub type Result<T> = std::result::Result<T, BrailleTableError>;

/// Errors that can occur while registering tables or loading custom manifests.
#[derive(Error, Debug)]
pub enum BrailleTableError {
    /// Table supports neither output nor input.
    #[error("table '{file_name}' must support at least one of output or input")]
    InvalidDescriptor { file_name: String },

    /// No table registered under the requested file name.
    #[error("no braille table registered for file name '{file_name}'")]
    TableNotFound { file_name: String },

    /// Failed to read a manifest file.
    #[error("failed to read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed manifest text (encoding or INI syntax).
    #[error("manifest parse error at line {line}: {message}")]
    ManifestParse { line: usize, message: String },

    /// Manifest parsed but does not fit the table schema.
    #[error("invalid manifest entry '{table}': {message}")]
    SchemaValidation { table: String, message: String },

    /// displayName value that is neither a string nor a locale mapping.
    #[error("unsupported displayName for table '{table}': {found}")]
    InvalidDisplayName { table: String, found: String },
}

impl BrailleTableError {
    /// Create a ManifestRead error.
    pub fn manifest_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ManifestRead {
            path: path.into(),
            source,
        }
    }

    /// Create a ManifestParse error for a 1-based line number.
    pub fn manifest_parse(line: usize, message: impl Into<String>) -> Self {
        Self::ManifestParse {
            line,
            message: message.into(),
        }
    }

    /// Create a SchemaValidation error.
    pub fn schema_validation(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaValidation {
            table: table.into(),
            message: message.into(),
        }
    }
}
