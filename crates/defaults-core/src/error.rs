//! Error types for defaults-core

use std::path::PathBuf;

/// Result type for defaults-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in defaults-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A plugin type was registered twice in the same layer
    #[error("Duplicate override for plugin type '{plugin_type}' in {scope}")]
    DuplicateOverride { plugin_type: String, scope: String },

    /// No layer holds an override for the plugin type
    #[error("No default instance configured for plugin type '{plugin_type}'")]
    LookupMiss { plugin_type: String },

    /// Machine is not declared in the loaded configuration
    #[error("Machine not found: {name}")]
    MachineNotFound { name: String },

    /// Profile is not declared in the loaded configuration
    #[error("Profile not found: {name}")]
    ProfileNotFound { name: String },

    /// Configuration parsed but is semantically invalid
    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn duplicate(plugin_type: &str, scope: String) -> Self {
        Self::DuplicateOverride {
            plugin_type: plugin_type.to_string(),
            scope,
        }
    }

    pub(crate) fn lookup_miss(plugin_type: &str) -> Self {
        Self::LookupMiss {
            plugin_type: plugin_type.to_string(),
        }
    }
}
