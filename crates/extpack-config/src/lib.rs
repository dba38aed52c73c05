//! Module build descriptors for browser-extension bundles.
//!
//! Each extension module (background script, options page, ...) declares
//! where its compiled entry lives and which bundle file it produces. This
//! crate resolves those declarations into absolute, immutable
//! [`ModuleBuildDescriptor`]s anchored at the declaration's own directory,
//! and aggregates them into a conflict-free [`BuildPlan`] for an external
//! bundler.

pub mod declaration;
pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod plan;
pub mod resolve;
pub mod settings;
pub mod validation;

// Re-export main types
pub use declaration::{DECLARATION_FILES, ModuleDeclaration, OutputDeclaration};
pub use descriptor::{ModuleBuildDescriptor, OutputTarget};
pub use error::*;
pub use plan::BuildPlan;
pub use resolve::{resolve, validate_filename};
pub use settings::{DeclarationDefaults, ENV_PREFIX};

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover};
pub use validation::{
    ConfigValidator, FsValidator, SchemaValidator, is_script_entry, validate_fs, validate_schema,
};
