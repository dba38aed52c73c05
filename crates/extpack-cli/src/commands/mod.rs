//! Command implementations.

pub mod check;
pub mod resolve;

use extpack_config::{ConfigDiscovery, DeclarationDefaults, ModuleDeclaration};

use crate::cli::SourceArgs;
use crate::error::{CliError, Result};

/// Load declarations from explicit files, or discover them under the root.
///
/// Defaults come from `EXTPACK_*` environment variables, then `--output-path`.
pub fn load_declarations(source: &SourceArgs) -> Result<Vec<ModuleDeclaration>> {
    let mut defaults = DeclarationDefaults::from_env()?;
    if let Some(path) = &source.output_path {
        defaults.output_path = path.clone();
    }
    tracing::debug!(output_path = %defaults.output_path.display(), "declaration defaults");

    if source.configs.is_empty() {
        return Ok(ConfigDiscovery::new(&source.root)
            .with_defaults(defaults)
            .load()?);
    }

    source
        .configs
        .iter()
        .map(|path| {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.clone()));
            }
            Ok(ModuleDeclaration::load_with_defaults(path, &defaults)?)
        })
        .collect()
}
