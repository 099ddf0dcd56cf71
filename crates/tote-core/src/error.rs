//! Load error handling
//!
//! Provides typed errors for loading entry files. I/O failures, malformed
//! JSON and a wrong top-level shape each get their own variant so callers
//! can react without string matching.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading entries into a [`Tote`](crate::Tote)
#[derive(Error, Debug)]
pub enum ToteError {
    /// Source file does not exist
    #[error("File not found: '{path}'")]
    NotFound { path: PathBuf },

    /// Permission denied reading the source
    #[error("Permission denied: cannot read '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other read failure
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source text is not valid JSON
    #[error("Invalid JSON in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an array
    #[error("Expected array in '{path}', found {found}")]
    Shape { path: PathBuf, found: &'static str },
}

impl ToteError {
    /// Create an error from an I/O error with path context
    ///
    /// Classifies the error based on its kind.
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => ToteError::NotFound { path },
            io::ErrorKind::PermissionDenied => ToteError::PermissionDenied {
                path,
                source: error,
            },
            _ => ToteError::Read {
                path,
                source: error,
            },
        }
    }

    /// Whether this error came from reading the source rather than its contents
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ToteError::NotFound { .. } | ToteError::PermissionDenied { .. } | ToteError::Read { .. }
        )
    }

    /// The source path the error refers to
    pub fn path(&self) -> &Path {
        match self {
            ToteError::NotFound { path }
            | ToteError::PermissionDenied { path, .. }
            | ToteError::Read { path, .. }
            | ToteError::Parse { path, .. }
            | ToteError::Shape { path, .. } => path,
        }
    }
}

/// Name of a JSON value's kind, used in shape errors
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Result type for load operations
pub type ToteResult<T> = Result<T, ToteError>;
