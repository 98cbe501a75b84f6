//! Machine-level default instance overrides
//!
//! A [`MachineOverride`] combines a host's own overrides with the profile
//! attached to it. Resolution consults the profile first, then the machine,
//! so a profile entry shadows a machine entry without removing it.

use crate::layer::{self, DefaultSource};
use crate::{Error, InstanceDefault, Profile, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// The machine's own overrides, one per plugin type.
#[derive(Debug, Clone)]
struct LocalOverrides {
    machine_name: String,
    overrides: HashMap<String, InstanceDefault>,
}

impl DefaultSource for LocalOverrides {
    fn source_name(&self) -> String {
        format!("machine '{}'", self.machine_name)
    }

    fn find_default_key(&self, plugin_type: &str) -> Option<&str> {
        self.overrides
            .get(plugin_type)
            .map(InstanceDefault::default_key)
    }

    fn instance_defaults(&self) -> Vec<InstanceDefault> {
        self.overrides.values().cloned().collect()
    }
}

/// Default instance overrides for one machine, layered under a profile.
///
/// Local overrides only grow: there is no removal or update. The profile is
/// shared and never mutated through the machine.
///
/// # Example
///
/// ```
/// use defaults_core::{MachineOverride, Profile};
/// use std::sync::Arc;
///
/// let mut profile = Profile::new("Test");
/// profile.add_override("ILogger", "Null").unwrap();
///
/// let mut machine = MachineOverride::with_profile("HOST1", Some(Arc::new(profile)));
/// machine.add_machine_override("ILogger", "Console").unwrap();
/// machine.add_machine_override("IMailer", "Smtp").unwrap();
///
/// assert_eq!(machine.default_key("ILogger").unwrap(), "Null");
/// assert_eq!(machine.default_key("IMailer").unwrap(), "Smtp");
/// ```
#[derive(Debug, Clone)]
pub struct MachineOverride {
    local: LocalOverrides,
    profile: Arc<Profile>,
}

impl MachineOverride {
    /// Create a machine with no overrides and the empty profile attached
    pub fn new(machine_name: impl Into<String>) -> Self {
        Self::with_profile(machine_name, None)
    }

    /// Create a machine attached to `profile`, or to the empty profile
    /// when `None`
    pub fn with_profile(machine_name: impl Into<String>, profile: Option<Arc<Profile>>) -> Self {
        Self {
            local: LocalOverrides {
                machine_name: machine_name.into(),
                overrides: HashMap::new(),
            },
            profile: profile.unwrap_or_else(|| Arc::new(Profile::empty())),
        }
    }

    pub fn machine_name(&self) -> &str {
        &self.local.machine_name
    }

    /// Name of the attached profile, empty when none is attached
    pub fn profile_name(&self) -> &str {
        self.profile.profile_name()
    }

    pub fn profile(&self) -> &Arc<Profile> {
        &self.profile
    }

    /// Register a machine-local override for a plugin type.
    ///
    /// Re-registering a plugin type is a configuration bug, not an update:
    /// it fails with [`Error::DuplicateOverride`] and leaves the existing
    /// entry in place. The attached profile is never touched.
    pub fn add_machine_override(
        &mut self,
        plugin_type_name: impl Into<String>,
        default_key: impl Into<String>,
    ) -> Result<()> {
        let plugin_type_name = plugin_type_name.into();
        if self.local.overrides.contains_key(&plugin_type_name) {
            return Err(Error::duplicate(&plugin_type_name, self.local.source_name()));
        }

        let instance = InstanceDefault::new(plugin_type_name.clone(), default_key);
        tracing::trace!(machine = %self.local.machine_name, %instance, "Registered machine override");
        self.local.overrides.insert(plugin_type_name, instance);
        Ok(())
    }

    /// True if either the profile or the machine overrides `plugin_type_name`
    pub fn has_override(&self, plugin_type_name: &str) -> bool {
        self.layers()
            .iter()
            .any(|layer| layer.has_override(plugin_type_name))
    }

    /// Effective default key, or `None` if no layer overrides the plugin type
    pub fn find_default_key(&self, plugin_type_name: &str) -> Option<&str> {
        layer::resolve_first(&self.layers(), plugin_type_name)
    }

    /// Effective default key for a plugin type.
    ///
    /// The profile wins over the machine. Fails with [`Error::LookupMiss`]
    /// when neither holds an override.
    pub fn default_key(&self, plugin_type_name: &str) -> Result<&str> {
        self.find_default_key(plugin_type_name)
            .ok_or_else(|| Error::lookup_miss(plugin_type_name))
    }

    /// Effective defaults, one per plugin type, sorted.
    ///
    /// Profile entries suppress machine entries for the same plugin type.
    /// Recomputed on each call.
    pub fn defaults(&self) -> Vec<InstanceDefault> {
        layer::merge_layers(&self.layers())
    }

    /// Only the overrides registered on this machine, unordered
    pub fn inner_defaults(&self) -> Vec<InstanceDefault> {
        self.local.instance_defaults()
    }

    /// Layers in precedence order
    fn layers(&self) -> [&dyn DefaultSource; 2] {
        [&*self.profile, &self.local]
    }
}
