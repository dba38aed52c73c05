//! extpack entry point: argument parsing, logging, command dispatch.

use clap::Parser;
use extpack_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init(args.no_color, args.quiet);

    let result = match &args.command {
        cli::Command::Resolve(resolve_args) => {
            commands::resolve::execute(resolve_args, &mut std::io::stdout().lock())
        }
        cli::Command::Check(check_args) => commands::check::execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
