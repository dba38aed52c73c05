//! Resolve command: print the build plan for the bundler.

use std::io::Write;

use extpack_config::validate_schema;

use crate::cli::ResolveArgs;
use crate::commands::load_declarations;
use crate::error::Result;

/// Resolve every declaration and write the plan JSON to `out`.
///
/// Nothing is written unless the whole plan resolves.
pub fn execute(args: &ResolveArgs, out: &mut impl Write) -> Result<()> {
    let declarations = load_declarations(&args.source)?;
    let plan = validate_schema(&declarations)?;
    let value = plan.to_bundler_json()?;

    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &value)?;
    } else {
        serde_json::to_writer(&mut *out, &value)?;
    }
    writeln!(out)?;

    tracing::info!(modules = plan.len(), "resolved build plan");
    Ok(())
}
