//! Command-line interface definition.
//!
//! - `extpack resolve` - print the resolved build plan as JSON
//! - `extpack check` - validate declarations without printing the plan

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// extpack - build descriptors for browser-extension modules
#[derive(Parser, Debug)]
#[command(
    name = "extpack",
    version,
    about = "Resolve browser-extension module declarations into a bundler-ready build plan",
    long_about = "Each extension module (background script, options page, ...) carries an\n\
                  extpack.toml next to its sources. extpack resolves every declaration against\n\
                  its own directory, checks that no two modules write the same bundle file,\n\
                  and prints the result for the bundler."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve declarations and print the build plan as JSON
    Resolve(ResolveArgs),

    /// Validate declarations without printing the plan
    Check(CheckArgs),
}

/// Where declarations come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Project root searched for extpack.toml / extpack.json files
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Explicit declaration files (disables discovery)
    #[arg(short, long = "config", value_name = "FILE")]
    pub configs: Vec<PathBuf>,

    /// Output directory for declarations that do not set one,
    /// relative to each declaration [env: EXTPACK_OUTPUT_PATH]
    #[arg(long, value_name = "DIR")]
    pub output_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Also verify that every entry file exists
    #[arg(long)]
    pub entries: bool,
}
