//! Defaults shared by every declaration in a build.

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable prefix for overrides (`EXTPACK_OUTPUT_PATH`, ...).
pub const ENV_PREFIX: &str = "EXTPACK_";

pub(crate) fn default_output_path() -> PathBuf {
    PathBuf::from("../../dist")
}

/// Values applied to declarations that leave a field unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationDefaults {
    /// Output directory, relative to each declaration's anchor.
    ///
    /// Modules live in `modules/<name>/`, so the default points at the
    /// project-level `dist` shared by all of them.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for DeclarationDefaults {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}

impl DeclarationDefaults {
    /// Built-in defaults overlaid with `EXTPACK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let env = Env::prefixed(ENV_PREFIX);
        Self::from_vars(env.iter().map(|(key, value)| (key.as_str().to_string(), value)))
    }

    // Values stay raw strings: figment's `Env` provider would parse a
    // directory named `2024` or `true` into a number or a bool.
    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let overrides = vars.into_iter().fold(Figment::new(), |figment, (key, value)| {
            figment.merge(Serialized::default(&key, value))
        });
        Self::from_figment(overrides)
    }

    fn from_figment(overrides: Figment) -> Result<Self> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(overrides)
            .extract()
            .map_err(|e| ConfigError::InvalidValue {
                field: e.path.join("."),
                hint: Some(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::{Format, Toml};

    #[test]
    fn default_points_at_shared_dist() {
        assert_eq!(
            DeclarationDefaults::default().output_path,
            PathBuf::from("../../dist")
        );
    }

    #[test]
    fn overrides_replace_output_path() {
        let defaults =
            DeclarationDefaults::from_figment(Figment::from(Toml::string("output_path = \"../build\"")))
                .unwrap();
        assert_eq!(defaults.output_path, PathBuf::from("../build"));
    }

    #[test]
    fn numeric_and_boolean_directory_names_stay_paths() {
        for raw in ["2024", "true", "1.50"] {
            let defaults =
                DeclarationDefaults::from_vars([("output_path".to_string(), raw.to_string())])
                    .unwrap();
            assert_eq!(defaults.output_path, PathBuf::from(raw));
        }
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let defaults =
            DeclarationDefaults::from_vars([("profile".to_string(), "release".to_string())])
                .unwrap();
        assert_eq!(defaults, DeclarationDefaults::default());
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        let defaults = DeclarationDefaults::from_figment(Figment::new()).unwrap();
        assert_eq!(defaults, DeclarationDefaults::default());
    }
}
