//! Resolved build descriptors handed to the external bundler.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Output target of a single module bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OutputTarget {
    filename: String,
    /// Serialized as `path` to match the shape bundlers expect.
    #[serde(rename = "path")]
    directory: PathBuf,
}

impl OutputTarget {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Absolute directory the bundle is written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path of the emitted bundle file.
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// A fully resolved, immutable build descriptor for one module.
///
/// Every path is absolute. Instances are only produced by
/// [`resolve`](crate::resolve) and the declaration loaders, so a descriptor
/// in hand has already passed path and filename validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModuleBuildDescriptor {
    name: String,
    entry: PathBuf,
    output: OutputTarget,
}

impl ModuleBuildDescriptor {
    pub(crate) fn new(name: String, entry: PathBuf, filename: String, directory: PathBuf) -> Self {
        Self {
            name,
            entry,
            output: OutputTarget {
                filename,
                directory,
            },
        }
    }

    /// Module label used in diagnostics (e.g. `background`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }

    pub fn output(&self) -> &OutputTarget {
        &self.output
    }

    pub fn output_filename(&self) -> &str {
        &self.output.filename
    }

    pub fn output_directory(&self) -> &Path {
        &self.output.directory
    }
}
