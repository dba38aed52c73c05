//! Per-module declaration files (`extpack.toml` / `extpack.json`).
//!
//! A declaration lives in its module's directory. That directory is the
//! anchor for every relative path the declaration contains:
//!
//! ```toml
//! entry = "./dist/Background.fs.js"
//!
//! [output]
//! filename = "background.js"
//! path = "../../dist"
//! ```

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Format, Json, Toml},
};
use path_clean::PathClean;
use serde::{Deserialize, Serialize};

use crate::descriptor::ModuleBuildDescriptor;
use crate::error::{ConfigError, Result};
use crate::resolve::{module_name, resolve_named};
use crate::settings::{DeclarationDefaults, default_output_path};

/// File names recognized as module declarations, in lookup priority.
pub const DECLARATION_FILES: [&str; 2] = ["extpack.toml", "extpack.json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDeclaration {
    /// Bundle file name, e.g. `background.js`
    pub filename: String,

    /// Output directory relative to the anchor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// An unresolved module declaration together with its anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleDeclaration {
    /// Module label; defaults to the anchor directory name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Compiled intermediate source file, relative to the anchor
    pub entry: PathBuf,

    pub output: OutputDeclaration,

    #[serde(skip)]
    anchor: PathBuf,
}

impl ModuleDeclaration {
    /// Declare a module programmatically.
    pub fn new(
        anchor: impl Into<PathBuf>,
        entry: impl Into<PathBuf>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            name: None,
            entry: entry.into(),
            output: OutputDeclaration {
                filename: filename.into(),
                path: None,
            },
            anchor: anchor.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.path = Some(path.into());
        self
    }

    /// Load a declaration file using built-in defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_defaults(path, &DeclarationDefaults::default())
    }

    /// Load a declaration file, filling unset fields from `defaults`.
    ///
    /// The anchor becomes the absolute directory containing the file. A
    /// relative `path` is made absolute against the working directory once,
    /// here, so resolution itself never depends on it.
    pub fn load_with_defaults(
        path: impl AsRef<Path>,
        defaults: &DeclarationDefaults,
    ) -> Result<Self> {
        let path = absolute(path.as_ref())?;
        tracing::debug!(path = %path.display(), "loading module declaration");

        let content = fs::read_to_string(&path)?;
        let figment = match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Figment::from(Toml::string(&content)),
            Some("json") => Figment::from(Json::string(&content)),
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        };

        let mut declaration: Self = figment.extract().map_err(|e| {
            let field = if e.path.is_empty() {
                path.display().to_string()
            } else {
                e.path.join(".")
            };
            ConfigError::InvalidValue {
                field,
                hint: Some(e.to_string()),
            }
        })?;

        declaration.anchor = path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| ConfigError::invalid_path(path.to_string_lossy(), "file has no parent"))?;
        if declaration.output.path.is_none() {
            declaration.output.path = Some(defaults.output_path.clone());
        }

        Ok(declaration)
    }

    pub fn anchor(&self) -> &Path {
        &self.anchor
    }

    /// Effective module name.
    pub fn module_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| module_name(&self.anchor))
    }

    /// Resolve into an absolute descriptor.
    pub fn resolve(&self) -> Result<ModuleBuildDescriptor> {
        let output_path = self
            .output
            .path
            .clone()
            .unwrap_or_else(default_output_path);

        resolve_named(
            self.module_name(),
            &self.anchor,
            &self.entry,
            &self.output.filename,
            &output_path,
        )
    }
}

pub(crate) fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.clean())
    } else {
        Ok(std::env::current_dir()?.join(path).clean())
    }
}
