//! Error handling for the extpack CLI.
//!
//! Domain errors come from `extpack-config`; this layer adds argument and
//! output failures and converts everything to a `miette` report at the edge.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Declaration resolution or loading failed
    #[error(transparent)]
    Config(#[from] extpack_config::ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Explicit declaration file does not exist
    #[error("Declaration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Actionable hint shown below the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        use extpack_config::ConfigError as C;

        match self {
            CliError::Config(C::InvalidFilename { .. }) => {
                Some("Output filenames must be a single file name; put directories in `output.path`")
            }
            CliError::Config(C::DuplicateOutputFilename { .. }) => {
                Some("Give each module a distinct `output.filename` or a different `output.path`")
            }
            CliError::Config(C::NotFound { .. }) => {
                Some("Add an extpack.toml to each module directory or pass --config <file>")
            }
            CliError::Config(C::EntryNotFound { .. }) => {
                Some("Compile the module sources before bundling")
            }
            CliError::FileNotFound(_) => Some("Check the --config path"),
            _ => None,
        }
    }
}

/// Convert a CLI error into a miette report for display.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err.hint() {
        Some(hint) => miette::miette!("{}\n\nHint: {}", err, hint),
        None => miette::miette!("{}", err),
    }
}
