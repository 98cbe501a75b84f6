//! Parsing of `defaults.toml` files
//!
//! A manifest is the parsed content of a single file. Several manifests
//! (global, project) are merged into an [`OverrideConfig`](super::OverrideConfig).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One machine as declared in a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSection {
    /// Name of the profile attached to the machine
    #[serde(default)]
    pub profile: Option<String>,

    /// Plugin type to default key
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

/// Parsed content of a `defaults.toml` file
///
/// ```toml
/// [profiles.Test]
/// ILogger = "Null"
///
/// [machines.HOST1]
/// profile = "Test"
///
/// [machines.HOST1.defaults]
/// ILogger = "Console"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Profile name to its plugin type overrides
    #[serde(default)]
    pub profiles: BTreeMap<String, BTreeMap<String, String>>,

    /// Machine name to its declaration
    #[serde(default)]
    pub machines: BTreeMap<String, MachineSection>,
}

impl Manifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use defaults_core::config::Manifest;
    ///
    /// let manifest = Manifest::parse(r#"
    /// [profiles.Test]
    /// ILogger = "Null"
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.profiles["Test"]["ILogger"], "Null");
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Read, parse and validate the manifest at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let manifest = Self::parse(&content)?;
        manifest.validate(path)?;
        Ok(manifest)
    }

    /// Reject names and keys that cannot identify anything
    ///
    /// `path` is only used for error reporting.
    pub fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: String| Error::InvalidConfig {
            path: path.to_path_buf(),
            message,
        };

        for (profile, overrides) in &self.profiles {
            if profile.trim().is_empty() {
                return Err(invalid("profile name must not be empty".to_string()));
            }
            check_overrides(overrides, &format!("profile '{}'", profile)).map_err(invalid)?;
        }

        for (machine, section) in &self.machines {
            if machine.trim().is_empty() {
                return Err(invalid("machine name must not be empty".to_string()));
            }
            check_overrides(&section.defaults, &format!("machine '{}'", machine))
                .map_err(invalid)?;
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty() && self.machines.is_empty()
    }
}

fn check_overrides(
    overrides: &BTreeMap<String, String>,
    scope: &str,
) -> std::result::Result<(), String> {
    for (plugin_type, default_key) in overrides {
        if plugin_type.trim().is_empty() {
            return Err(format!("{}: plugin type must not be empty", scope));
        }
        if default_key.trim().is_empty() {
            return Err(format!(
                "{}: default key for '{}' must not be empty",
                scope, plugin_type
            ));
        }
    }
    Ok(())
}
