//! Configuration resolution with layered manifests
//!
//! The `ConfigResolver` loads the global manifest and the project manifest
//! and merges them into a single [`OverrideConfig`].

use super::manifest::Manifest;
use super::registry::OverrideConfig;
use crate::Result;
use std::path::{Path, PathBuf};

/// File name of a defaults manifest
pub const MANIFEST_FILE: &str = "defaults.toml";

/// Directory under the platform config dir holding the global manifest
const APP_DIR: &str = "plugin-defaults";

/// Resolves configuration by merging manifests
///
/// Manifests are loaded in order:
/// 1. Global defaults (`<config_dir>/plugin-defaults/defaults.toml`)
/// 2. Project manifest (the path given to [`ConfigResolver::new`])
///
/// Later manifests add profiles and machines; they never silently replace
/// an override declared by an earlier one.
pub struct ConfigResolver {
    /// Project manifest path
    project_file: PathBuf,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform-appropriate directory is used via `dirs::config_dir()`.
    global_config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver for the given project manifest
    ///
    /// Uses the platform-appropriate global config directory:
    /// - Linux: `~/.config/plugin-defaults/`
    /// - macOS: `~/Library/Application Support/plugin-defaults/`
    /// - Windows: `%APPDATA%\plugin-defaults\`
    pub fn new(project_file: impl Into<PathBuf>) -> Self {
        Self {
            project_file: project_file.into(),
            global_config_dir_override: None,
        }
    }

    /// Create a resolver with a custom global config directory.
    ///
    /// This is primarily useful for testing, where the real user config
    /// must not leak into results.
    pub fn with_global_config_dir(
        project_file: impl Into<PathBuf>,
        global_config_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_file: project_file.into(),
            global_config_dir_override: Some(global_config_dir.into()),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join(APP_DIR))
    }

    /// Path of the global manifest, if a config directory is known
    pub fn global_config_path(&self) -> Option<PathBuf> {
        self.global_config_dir().map(|d| d.join(MANIFEST_FILE))
    }

    pub fn project_file(&self) -> &Path {
        &self.project_file
    }

    pub fn has_project_config(&self) -> bool {
        self.project_file.is_file()
    }

    /// Load and merge all manifests
    ///
    /// Missing manifests are skipped. Invalid TOML, invalid names and
    /// duplicate overrides produce an error.
    pub fn resolve(&self) -> Result<OverrideConfig> {
        let mut config = OverrideConfig::new();

        // Layer 1 - Global defaults
        if let Some(global_config_path) = self.global_config_path() {
            if global_config_path.is_file() {
                tracing::debug!(?global_config_path, "Loading global manifest (layer 1)");
                config.merge_manifest(&Manifest::load(&global_config_path)?)?;
            } else {
                tracing::debug!(
                    ?global_config_path,
                    "No global manifest found (layer 1), skipping"
                );
            }
        }

        // Layer 2 - Project manifest
        let project_file = &self.project_file;
        if project_file.is_file() {
            tracing::debug!(?project_file, "Loading project manifest (layer 2)");
            config.merge_manifest(&Manifest::load(project_file)?)?;
        } else {
            tracing::debug!(?project_file, "No project manifest found (layer 2), skipping");
        }

        Ok(config)
    }
}
