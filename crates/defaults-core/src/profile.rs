//! Named bundles of default instance overrides
//!
//! A profile represents a policy choice such as "use test doubles
//! everywhere". Machines attach a profile and its entries take precedence
//! over the machine's own overrides.

use crate::layer::DefaultSource;
use crate::{Error, InstanceDefault, Result};
use std::collections::HashMap;

/// A named set of overrides, at most one per plugin type.
///
/// An empty name means "no profile".
///
/// # Example
///
/// ```
/// use defaults_core::Profile;
///
/// let mut profile = Profile::new("Test");
/// profile.add_override("ILogger", "Null").unwrap();
///
/// assert!(profile.has_override("ILogger"));
/// assert_eq!(profile.default_key("ILogger").unwrap(), "Null");
/// assert!(profile.default_key("ICache").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Profile {
    profile_name: String,
    overrides: HashMap<String, InstanceDefault>,
}

impl Profile {
    /// Create a profile with no overrides
    pub fn new(profile_name: impl Into<String>) -> Self {
        Self {
            profile_name: profile_name.into(),
            overrides: HashMap::new(),
        }
    }

    /// The "no profile" placeholder: empty name, no overrides
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register an override for a plugin type.
    ///
    /// Fails with [`Error::DuplicateOverride`] if the plugin type is
    /// already overridden by this profile; the profile is left unchanged.
    pub fn add_override(
        &mut self,
        plugin_type_name: impl Into<String>,
        default_key: impl Into<String>,
    ) -> Result<()> {
        let plugin_type_name = plugin_type_name.into();
        if self.overrides.contains_key(&plugin_type_name) {
            return Err(Error::duplicate(&plugin_type_name, self.source_name()));
        }

        let instance = InstanceDefault::new(plugin_type_name.clone(), default_key);
        tracing::trace!(profile = %self.profile_name, %instance, "Registered profile override");
        self.overrides.insert(plugin_type_name, instance);
        Ok(())
    }

    pub fn has_override(&self, plugin_type_name: &str) -> bool {
        self.overrides.contains_key(plugin_type_name)
    }

    /// The overriding default key for a plugin type.
    ///
    /// Returns [`Error::LookupMiss`] when the profile holds no override;
    /// check [`Profile::has_override`] first when a miss is expected.
    pub fn default_key(&self, plugin_type_name: &str) -> Result<&str> {
        self.overrides
            .get(plugin_type_name)
            .map(InstanceDefault::default_key)
            .ok_or_else(|| Error::lookup_miss(plugin_type_name))
    }

    /// Unordered snapshot of every override in the profile
    pub fn defaults(&self) -> Vec<InstanceDefault> {
        self.overrides.values().cloned().collect()
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl DefaultSource for Profile {
    fn source_name(&self) -> String {
        format!("profile '{}'", self.profile_name)
    }

    fn find_default_key(&self, plugin_type: &str) -> Option<&str> {
        self.overrides
            .get(plugin_type)
            .map(InstanceDefault::default_key)
    }

    fn instance_defaults(&self) -> Vec<InstanceDefault> {
        self.defaults()
    }
}
