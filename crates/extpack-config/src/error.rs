//! Error types for descriptor resolution and declaration loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Resolution errors (pure, no filesystem access)
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("invalid output filename {filename:?}: {reason}")]
    InvalidFilename { filename: String, reason: String },

    #[error("anchor must be an absolute path: {}", .anchor.display())]
    RelativeAnchor { anchor: PathBuf },

    // Aggregation errors
    #[error(
        "duplicate output filename {filename:?} in {}: declared by both '{first}' and '{second}'",
        .directory.display()
    )]
    DuplicateOutputFilename {
        filename: String,
        directory: PathBuf,
        first: String,
        second: String,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry file not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    // Declaration loading errors
    #[error("no module declarations found under {}", .root.display())]
    NotFound { root: PathBuf },

    #[error("unsupported declaration format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid declaration value for '{field}'{}", hint_suffix(.hint))]
    InvalidValue { field: String, hint: Option<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default()
}

impl ConfigError {
    pub(crate) fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_filename(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFilename {
            filename: filename.into(),
            reason: reason.into(),
        }
    }
}
