//! Aggregation of resolved descriptors into a single build plan.

use std::collections::HashMap;
use std::path::PathBuf;

use serde_json::Value;

use crate::declaration::ModuleDeclaration;
use crate::descriptor::ModuleBuildDescriptor;
use crate::error::{ConfigError, Result};

/// The complete, conflict-free set of descriptors for one build.
///
/// A plan is all-or-nothing: if any declaration fails to resolve, or two
/// modules would write the same bundle file, no plan is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildPlan {
    descriptors: Vec<ModuleBuildDescriptor>,
}

impl BuildPlan {
    /// Aggregate already-resolved descriptors, keeping declaration order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicateOutputFilename` for the first pair of
    /// descriptors sharing an output directory and filename.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = ModuleBuildDescriptor>,
    ) -> Result<Self> {
        let mut seen: HashMap<(PathBuf, String), String> = HashMap::new();
        let mut collected = Vec::new();

        for descriptor in descriptors {
            let key = (
                descriptor.output_directory().to_path_buf(),
                descriptor.output_filename().to_string(),
            );
            if let Some(first) = seen.get(&key) {
                return Err(ConfigError::DuplicateOutputFilename {
                    filename: key.1,
                    directory: key.0,
                    first: first.clone(),
                    second: descriptor.name().to_string(),
                });
            }
            seen.insert(key, descriptor.name().to_string());
            collected.push(descriptor);
        }

        tracing::debug!(modules = collected.len(), "build plan assembled");
        Ok(Self {
            descriptors: collected,
        })
    }

    /// Resolve every declaration, then aggregate.
    pub fn resolve_all<'a>(
        declarations: impl IntoIterator<Item = &'a ModuleDeclaration>,
    ) -> Result<Self> {
        let descriptors = declarations
            .into_iter()
            .map(ModuleDeclaration::resolve)
            .collect::<Result<Vec<_>>>()?;
        Self::from_descriptors(descriptors)
    }

    pub fn descriptors(&self) -> &[ModuleBuildDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Look up a descriptor by module name.
    pub fn get(&self, name: &str) -> Option<&ModuleBuildDescriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    /// JSON array consumed by the external bundler.
    ///
    /// # Errors
    ///
    /// Fails when a resolved path is not valid UTF-8.
    pub fn to_bundler_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(&self.descriptors)
    }
}

impl<'a> IntoIterator for &'a BuildPlan {
    type Item = &'a ModuleBuildDescriptor;
    type IntoIter = std::slice::Iter<'a, ModuleBuildDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve;

    fn background() -> ModuleBuildDescriptor {
        resolve(
            "/proj/modules/background",
            "./dist/Background.fs.js",
            "background.js",
            "../../dist",
        )
        .unwrap()
    }

    fn options() -> ModuleBuildDescriptor {
        resolve(
            "/proj/modules/options",
            "./dist/Options.fs.js",
            "options.js",
            "../../dist",
        )
        .unwrap()
    }

    #[test]
    fn distinct_filenames_share_one_directory() {
        let plan = BuildPlan::from_descriptors([background(), options()]).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.descriptors()[0].name(), "background");
        assert_eq!(plan.descriptors()[1].name(), "options");
        for descriptor in &plan {
            assert_eq!(
                descriptor.output_directory(),
                std::path::Path::new("/proj/dist")
            );
        }
    }

    #[test]
    fn duplicate_filename_in_same_directory_is_detected() {
        let legacy = resolve(
            "/proj/modules/legacy",
            "./dist/Background.fs.js",
            "background.js",
            "../../dist/",
        )
        .unwrap();

        let err = BuildPlan::from_descriptors([background(), options(), legacy]).unwrap_err();
        match err {
            ConfigError::DuplicateOutputFilename {
                filename,
                directory,
                first,
                second,
            } => {
                assert_eq!(filename, "background.js");
                assert_eq!(directory, PathBuf::from("/proj/dist"));
                assert_eq!(first, "background");
                assert_eq!(second, "legacy");
            }
            other => panic!("expected DuplicateOutputFilename, got {other:?}"),
        }
    }

    #[test]
    fn same_filename_in_different_directories_is_allowed() {
        let other = resolve(
            "/proj/modules/background",
            "./dist/Background.fs.js",
            "background.js",
            "../../dist/firefox",
        )
        .unwrap();
        assert!(BuildPlan::from_descriptors([background(), other]).is_ok());
    }

    #[test]
    fn lookup_by_name() {
        let plan = BuildPlan::from_descriptors([background(), options()]).unwrap();
        assert_eq!(
            plan.get("options").map(|d| d.output_filename()),
            Some("options.js")
        );
        assert!(plan.get("popup").is_none());
    }

    #[test]
    fn empty_plan_serializes_to_empty_array() {
        let plan = BuildPlan::from_descriptors(Vec::new()).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.to_bundler_json().unwrap(), serde_json::json!([]));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_a_serialization_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let anchor = std::path::Path::new("/proj/modules").join(OsStr::from_bytes(b"opt\xffions"));
        let descriptor =
            resolve(&anchor, "./dist/Options.fs.js", "options.js", "../../dist").unwrap();
        let plan = BuildPlan::from_descriptors([descriptor]).unwrap();

        let err = plan.to_bundler_json().unwrap_err();
        assert!(err.is_data());
    }
}
