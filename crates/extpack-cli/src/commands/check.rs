//! Check command: validate declarations without emitting a plan.

use extpack_config::{ConfigValidator, FsValidator, SchemaValidator, is_script_entry};

use crate::cli::CheckArgs;
use crate::commands::load_declarations;
use crate::error::Result;
use crate::ui;

/// Validate declarations; with `--entries`, also require entry files on disk.
pub fn execute(args: &CheckArgs) -> Result<()> {
    let declarations = load_declarations(&args.source)?;
    ui::info(&format!("Checking {} module declaration(s)...", declarations.len()));

    let plan = if args.entries {
        FsValidator.validate(&declarations)?
    } else {
        SchemaValidator.validate(&declarations)?
    };

    for descriptor in &plan {
        if !is_script_entry(descriptor.entry()) {
            ui::warning(&format!(
                "{}: entry {} is not a JavaScript module",
                descriptor.name(),
                descriptor.entry().display()
            ));
        }
        ui::success(&format!(
            "{} -> {}",
            descriptor.name(),
            descriptor.output().file_path().display()
        ));
    }

    ui::success("All declarations are valid");
    Ok(())
}
