//! Error types for the export engine.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for every export operation.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Store open or query errors, including rows of unexpected shape
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The store file does not exist
    #[error("Database file '{path}' does not exist")]
    DatabaseNotFound { path: PathBuf },
    /// Creating a sink file or target directory failed
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Writing to the active sink failed
    #[error("Failed to write output: {source}")]
    Write {
        #[from]
        source: std::io::Error,
    },
    /// Serialization of the export summary failed
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Unknown output mode or invalid option combination
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ExportError {
    /// Creates a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ExportError::database_error(message, e))
    }
}

/// Extension trait attaching the offending path to I/O errors.
pub trait IoResultExt<T> {
    /// Map I/O errors to [`ExportError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| ExportError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
