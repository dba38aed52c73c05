//! Logging setup for the extpack CLI.
//!
//! Log output goes to stderr so that stdout carries only the plan JSON.
//!
//! - `--verbose`: debug level for extpack crates
//! - `--quiet`: errors only
//! - otherwise `RUST_LOG`, falling back to info

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ui;

/// Filter directives for the given verbosity flags.
pub fn filter_directives(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some("extpack_config=debug,extpack_cli=debug")
    } else if quiet {
        Some("error")
    } else {
        None
    }
}

/// Initialize the global tracing subscriber. Call once, before any logging.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = match filter_directives(verbose, quiet) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("extpack_config=info,extpack_cli=info")),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(ui::should_use_color(no_color))
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
