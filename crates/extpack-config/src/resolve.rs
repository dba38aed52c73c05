//! Anchored resolution of module entry and output paths.
//!
//! Relative paths in a declaration are always joined onto the declaration's
//! own directory (the anchor) and normalized lexically. The process working
//! directory is never consulted, so the same declaration resolves to the same
//! descriptor no matter where the build is started from.

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

use crate::descriptor::ModuleBuildDescriptor;
use crate::error::{ConfigError, Result};

/// Resolve one module declaration into an absolute descriptor.
///
/// The module name is taken from the anchor's final path component.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use extpack_config::resolve;
///
/// let descriptor = resolve(
///     "/proj/modules/background",
///     "./dist/Background.fs.js",
///     "background.js",
///     "../../dist",
/// )
/// .unwrap();
///
/// assert_eq!(
///     descriptor.entry(),
///     Path::new("/proj/modules/background/dist/Background.fs.js")
/// );
/// assert_eq!(descriptor.output_directory(), Path::new("/proj/dist"));
/// ```
pub fn resolve(
    anchor: impl AsRef<Path>,
    entry: impl AsRef<Path>,
    output_filename: &str,
    output_dir: impl AsRef<Path>,
) -> Result<ModuleBuildDescriptor> {
    let anchor = anchor.as_ref();
    let name = module_name(anchor);
    resolve_named(name, anchor, entry.as_ref(), output_filename, output_dir.as_ref())
}

pub(crate) fn resolve_named(
    name: String,
    anchor: &Path,
    entry: &Path,
    output_filename: &str,
    output_dir: &Path,
) -> Result<ModuleBuildDescriptor> {
    if !anchor.is_absolute() {
        return Err(ConfigError::RelativeAnchor {
            anchor: anchor.to_path_buf(),
        });
    }

    check_relative(entry)?;
    if matches!(
        entry.components().next_back(),
        None | Some(Component::CurDir | Component::ParentDir | Component::RootDir)
    ) {
        return Err(ConfigError::invalid_path(
            entry.to_string_lossy(),
            "entry must name a file",
        ));
    }
    check_relative(output_dir)?;
    validate_filename(output_filename)?;

    let entry_path = anchored(anchor, entry);
    let output_path = anchored(anchor, output_dir);

    tracing::debug!(
        module = %name,
        entry = %entry_path.display(),
        output = %output_path.join(output_filename).display(),
        "resolved module descriptor"
    );

    Ok(ModuleBuildDescriptor::new(
        name,
        entry_path,
        output_filename.to_string(),
        output_path,
    ))
}

/// Validate a bundle filename: a single path component, no separators.
///
/// Both `/` and `\` are rejected on every platform so that a filename never
/// silently turns into a subdirectory.
pub fn validate_filename(filename: &str) -> Result<()> {
    if filename.trim().is_empty() {
        return Err(ConfigError::invalid_filename(filename, "filename is empty"));
    }
    if filename.contains(['/', '\\']) {
        return Err(ConfigError::invalid_filename(
            filename,
            "filename contains a path separator",
        ));
    }
    if filename.contains('\0') {
        return Err(ConfigError::invalid_filename(
            filename,
            "filename contains a null byte",
        ));
    }
    if filename == "." || filename == ".." {
        return Err(ConfigError::invalid_filename(
            filename,
            "filename is a directory reference",
        ));
    }
    Ok(())
}

fn check_relative(path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.trim().is_empty() {
        return Err(ConfigError::invalid_path(raw, "path is empty"));
    }
    if raw.contains('\0') {
        return Err(ConfigError::invalid_path(raw, "path contains a null byte"));
    }
    Ok(())
}

fn anchored(anchor: &Path, relative: &Path) -> PathBuf {
    let joined = anchor.join(relative);
    let cleaned = joined.clean();
    tracing::trace!(
        joined = %joined.display(),
        cleaned = %cleaned.display(),
        "normalized path"
    );
    cleaned
}

/// Default module label: the anchor directory's final component.
pub(crate) fn module_name(anchor: &Path) -> String {
    anchor
        .clean()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| anchor.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_background_example() {
        let descriptor = resolve(
            "/proj/modules/background",
            "./dist/Background.fs.js",
            "background.js",
            "../../dist",
        )
        .unwrap();

        assert_eq!(descriptor.name(), "background");
        assert_eq!(
            descriptor.entry(),
            Path::new("/proj/modules/background/dist/Background.fs.js")
        );
        assert_eq!(descriptor.output_filename(), "background.js");
        assert_eq!(descriptor.output_directory(), Path::new("/proj/dist"));
    }

    #[test]
    fn trailing_slash_in_output_dir_is_normalized() {
        let descriptor = resolve(
            "/proj/modules/background",
            "./dist/Background.fs.js",
            "background.js",
            "../../dist/",
        )
        .unwrap();
        assert_eq!(descriptor.output_directory(), Path::new("/proj/dist"));
    }

    #[test]
    fn entry_without_dot_prefix_is_still_anchored() {
        let descriptor = resolve(
            "/proj/modules/background",
            "dist/Background.fs.js",
            "background.js",
            "../../dist",
        )
        .unwrap();
        assert_eq!(
            descriptor.entry(),
            Path::new("/proj/modules/background/dist/Background.fs.js")
        );
    }

    #[test]
    fn absolute_entry_replaces_anchor() {
        let descriptor = resolve(
            "/proj/modules/options",
            "/shared/build/Options.fs.js",
            "options.js",
            "../../dist",
        )
        .unwrap();
        assert_eq!(descriptor.entry(), Path::new("/shared/build/Options.fs.js"));
    }

    #[test]
    fn empty_entry_is_invalid_path() {
        let err = resolve("/proj/modules/background", "", "background.js", "../../dist")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPath { .. }));
    }

    #[test]
    fn entry_naming_a_directory_is_invalid_path() {
        for entry in [".", "..", "dist/.."] {
            let err = resolve("/proj/modules/background", entry, "background.js", "../../dist")
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidPath { .. }),
                "expected InvalidPath for {entry:?}"
            );
        }
    }

    #[test]
    fn empty_output_dir_is_invalid_path() {
        let err = resolve(
            "/proj/modules/background",
            "./dist/Background.fs.js",
            "background.js",
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPath { .. }));
    }

    #[test]
    fn filename_with_separator_is_rejected() {
        for filename in ["sub/dir/options.js", "sub\\options.js", "/options.js"] {
            let err = resolve(
                "/proj/modules/options",
                "./dist/Options.fs.js",
                filename,
                "../../dist",
            )
            .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidFilename { .. }),
                "expected InvalidFilename for {filename:?}"
            );
        }
    }

    #[test]
    fn empty_and_dot_filenames_are_rejected() {
        for filename in ["", "  ", ".", ".."] {
            assert!(matches!(
                validate_filename(filename),
                Err(ConfigError::InvalidFilename { .. })
            ));
        }
    }

    #[test]
    fn relative_anchor_is_rejected() {
        let err = resolve(
            "modules/background",
            "./dist/Background.fs.js",
            "background.js",
            "../../dist",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::RelativeAnchor { .. }));
    }

    #[test]
    fn module_name_ignores_trailing_dot_segments() {
        assert_eq!(module_name(Path::new("/proj/modules/options/.")), "options");
        assert_eq!(module_name(Path::new("/")), "/");
    }
}
