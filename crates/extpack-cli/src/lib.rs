//! extpack CLI - resolve browser-extension module declarations.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - `resolve` and `check`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
