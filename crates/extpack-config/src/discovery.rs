//! File-based declaration discovery for CLI use
//!
//! Walks a project tree and collects one declaration file per module
//! directory.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::declaration::{DECLARATION_FILES, ModuleDeclaration, absolute};
use crate::error::{ConfigError, Result};
use crate::plan::BuildPlan;
use crate::settings::DeclarationDefaults;

/// Module directories are expected a few levels below the root
/// (`modules/<name>/extpack.toml`).
const MAX_DEPTH: usize = 4;

/// Directory names never searched for declarations.
const SKIPPED_DIRS: [&str; 3] = ["node_modules", "dist", "target"];

/// Searches a project tree for module declaration files.
///
/// # Example
///
/// ```no_run
/// use extpack_config::ConfigDiscovery;
///
/// let plan = ConfigDiscovery::new(".").plan().unwrap();
/// for descriptor in &plan {
///     println!("{}", descriptor.entry().display());
/// }
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
    defaults: DeclarationDefaults,
}

impl ConfigDiscovery {
    /// Create a new discovery rooted at `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            defaults: DeclarationDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: DeclarationDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Find declaration files, sorted by path.
    ///
    /// When a directory holds more than one declaration file, the first name
    /// in [`DECLARATION_FILES`] wins.
    pub fn find(&self) -> Result<Vec<PathBuf>> {
        let root = absolute(&self.root)?;
        let mut by_dir: BTreeMap<PathBuf, (usize, PathBuf)> = BTreeMap::new();

        let walker = WalkDir::new(&root)
            .max_depth(MAX_DEPTH)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry));

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(priority) = entry
                .file_name()
                .to_str()
                .and_then(|name| DECLARATION_FILES.iter().position(|f| *f == name))
            else {
                continue;
            };
            let Some(dir) = entry.path().parent() else {
                continue;
            };

            tracing::debug!(path = %entry.path().display(), "found module declaration");
            match by_dir.get(dir) {
                Some((current, _)) if *current <= priority => {}
                _ => {
                    by_dir.insert(dir.to_path_buf(), (priority, entry.path().to_path_buf()));
                }
            }
        }

        Ok(by_dir.into_values().map(|(_, path)| path).collect())
    }

    /// Load every discovered declaration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no declaration file is found.
    pub fn load(&self) -> Result<Vec<ModuleDeclaration>> {
        let files = self.find()?;
        if files.is_empty() {
            return Err(ConfigError::NotFound {
                root: self.root.clone(),
            });
        }

        files
            .iter()
            .map(|path| ModuleDeclaration::load_with_defaults(path, &self.defaults))
            .collect()
    }

    /// Load, resolve and aggregate every discovered declaration.
    pub fn plan(&self) -> Result<BuildPlan> {
        let declarations = self.load()?;
        BuildPlan::resolve_all(&declarations)
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name();
    name.to_str().is_some_and(|n| n.starts_with('.'))
        || SKIPPED_DIRS.iter().any(|skipped| name == OsStr::new(skipped))
}

/// Discover and plan every module under `root` (convenience function)
pub fn discover(root: impl AsRef<Path>) -> Result<BuildPlan> {
    ConfigDiscovery::new(root).plan()
}
