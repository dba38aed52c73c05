//! Pluggable declaration validation strategies
//!
//! Separates pure resolution checks (for library use) from filesystem checks
//! (for CLI use). The resolver itself never touches the filesystem.

use std::path::Path;

use crate::declaration::ModuleDeclaration;
use crate::error::{ConfigError, Result};
use crate::plan::BuildPlan;

/// Trait for pluggable declaration validation strategies
pub trait ConfigValidator {
    /// Validate declarations, producing the build plan on success
    fn validate(&self, declarations: &[ModuleDeclaration]) -> Result<BuildPlan>;
}

/// Resolution-only validation (no filesystem checks)
///
/// Checks entry paths, output filenames and output filename uniqueness.
///
/// # Example
///
/// ```
/// use extpack_config::{ConfigValidator, ModuleDeclaration, SchemaValidator};
///
/// let declarations = vec![
///     ModuleDeclaration::new("/proj/modules/background", "./dist/Background.fs.js", "background.js"),
///     ModuleDeclaration::new("/proj/modules/options", "./dist/Options.fs.js", "options.js"),
/// ];
///
/// let plan = SchemaValidator.validate(&declarations).unwrap();
/// assert_eq!(plan.len(), 2);
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, declarations: &[ModuleDeclaration]) -> Result<BuildPlan> {
        BuildPlan::resolve_all(declarations)
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`] and then checks that every entry file exists.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, declarations: &[ModuleDeclaration]) -> Result<BuildPlan> {
        let plan = SchemaValidator.validate(declarations)?;

        for descriptor in &plan {
            if !descriptor.entry().is_file() {
                return Err(ConfigError::EntryNotFound {
                    path: descriptor.entry().to_path_buf(),
                });
            }
        }

        Ok(plan)
    }
}

/// Convenience function for resolution-only validation
pub fn validate_schema(declarations: &[ModuleDeclaration]) -> Result<BuildPlan> {
    SchemaValidator.validate(declarations)
}

/// Convenience function for filesystem validation
pub fn validate_fs(declarations: &[ModuleDeclaration]) -> Result<BuildPlan> {
    FsValidator.validate(declarations)
}

/// Returns true if `path` looks like a compiled intermediate module
/// (`*.js`, `*.mjs`, `*.cjs`).
pub fn is_script_entry(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("js" | "mjs" | "cjs")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_validator_accepts_distinct_modules() {
        let declarations = vec![
            ModuleDeclaration::new("/proj/modules/background", "./dist/Background.fs.js", "background.js"),
            ModuleDeclaration::new("/proj/modules/options", "./dist/Options.fs.js", "options.js"),
        ];
        assert!(validate_schema(&declarations).is_ok());
    }

    #[test]
    fn schema_validator_rejects_duplicate_filenames() {
        let declarations = vec![
            ModuleDeclaration::new("/proj/modules/background", "./dist/Background.fs.js", "app.js"),
            ModuleDeclaration::new("/proj/modules/options", "./dist/Options.fs.js", "app.js"),
        ];
        assert!(matches!(
            validate_schema(&declarations).unwrap_err(),
            ConfigError::DuplicateOutputFilename { .. }
        ));
    }

    #[test]
    fn schema_validator_stops_at_first_invalid_declaration() {
        let declarations = vec![
            ModuleDeclaration::new("/proj/modules/background", "", "background.js"),
            ModuleDeclaration::new("/proj/modules/options", "./dist/Options.fs.js", "a/options.js"),
        ];
        assert!(matches!(
            validate_schema(&declarations).unwrap_err(),
            ConfigError::InvalidPath { .. }
        ));
    }

    #[test]
    fn script_entry_detection() {
        assert!(is_script_entry(Path::new("dist/Background.fs.js")));
        assert!(is_script_entry(Path::new("dist/worker.mjs")));
        assert!(!is_script_entry(Path::new("dist/Background.fs")));
    }
}
