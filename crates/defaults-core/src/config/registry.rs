//! Profiles and machines collected from one or more manifests

use super::manifest::Manifest;
use crate::{Error, MachineOverride, Profile, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A machine as declared across all loaded manifests
#[derive(Debug, Clone)]
struct MachineDefinition {
    profile: Option<String>,
    local: MachineOverride,
}

/// Every profile and machine declared by the loaded configuration.
///
/// Manifests are merged strictly: a plugin type declared twice for the same
/// profile or machine is a [`Error::DuplicateOverride`], even when the two
/// declarations come from different files.
///
/// # Example
///
/// ```
/// use defaults_core::config::{Manifest, OverrideConfig};
///
/// let manifest = Manifest::parse(r#"
/// [profiles.Test]
/// ILogger = "Null"
///
/// [machines.HOST1]
/// profile = "Test"
///
/// [machines.HOST1.defaults]
/// ILogger = "Console"
/// "#).unwrap();
///
/// let config = OverrideConfig::from_manifest(&manifest).unwrap();
/// let machine = config.build_machine("HOST1").unwrap();
/// assert_eq!(machine.default_key("ILogger").unwrap(), "Null");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OverrideConfig {
    profiles: BTreeMap<String, Arc<Profile>>,
    machines: BTreeMap<String, MachineDefinition>,
}

impl OverrideConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        let mut config = Self::new();
        config.merge_manifest(manifest)?;
        Ok(config)
    }

    /// Add the profiles and machines of `manifest`.
    ///
    /// A machine's `profile` from a later manifest replaces an earlier one.
    /// On error the configuration is left as it was.
    pub fn merge_manifest(&mut self, manifest: &Manifest) -> Result<()> {
        let mut merged = self.clone();
        merged.apply(manifest)?;
        *self = merged;
        Ok(())
    }

    fn apply(&mut self, manifest: &Manifest) -> Result<()> {
        for (name, overrides) in &manifest.profiles {
            let profile = self
                .profiles
                .entry(name.clone())
                .or_insert_with(|| Arc::new(Profile::new(name.clone())));
            let profile = Arc::make_mut(profile);
            for (plugin_type, default_key) in overrides {
                profile.add_override(plugin_type.clone(), default_key.clone())?;
            }
        }

        for (name, section) in &manifest.machines {
            let definition = self
                .machines
                .entry(name.clone())
                .or_insert_with(|| MachineDefinition {
                    profile: None,
                    local: MachineOverride::new(name.clone()),
                });
            if let Some(profile) = &section.profile {
                definition.profile = Some(profile.clone());
            }
            for (plugin_type, default_key) in &section.defaults {
                definition
                    .local
                    .add_machine_override(plugin_type.clone(), default_key.clone())?;
            }
        }

        Ok(())
    }

    /// A loaded profile, shared with every machine built from it
    pub fn profile(&self, name: &str) -> Result<Arc<Profile>> {
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| Error::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Profile names, sorted
    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    /// Machine names, sorted
    pub fn machine_names(&self) -> Vec<String> {
        self.machines.keys().cloned().collect()
    }

    pub fn has_machine(&self, name: &str) -> bool {
        self.machines.contains_key(name)
    }

    /// Build the machine `name` with the profile it declares.
    pub fn build_machine(&self, name: &str) -> Result<MachineOverride> {
        let definition = self
            .machines
            .get(name)
            .ok_or_else(|| Error::MachineNotFound {
                name: name.to_string(),
            })?;

        let profile = match definition.profile.as_deref() {
            Some(profile) if !profile.is_empty() => Some(self.profile(profile)?),
            _ => None,
        };

        tracing::debug!(
            machine = name,
            profile = definition.profile.as_deref().unwrap_or(""),
            "Building machine overrides"
        );
        Self::attach(&definition.local, profile)
    }

    /// Build the machine `name` with `profile` attached in place of the one
    /// it declares.
    ///
    /// A machine that is not declared gets no local overrides, so only the
    /// profile applies.
    pub fn build_machine_with_profile(&self, name: &str, profile: &str) -> Result<MachineOverride> {
        let profile = self.profile(profile)?;
        tracing::debug!(
            machine = name,
            profile = profile.profile_name(),
            "Building machine overrides with explicit profile"
        );

        match self.machines.get(name) {
            Some(definition) => Self::attach(&definition.local, Some(profile)),
            None => Ok(MachineOverride::with_profile(name, Some(profile))),
        }
    }

    fn attach(local: &MachineOverride, profile: Option<Arc<Profile>>) -> Result<MachineOverride> {
        let mut machine = MachineOverride::with_profile(local.machine_name(), profile);
        for default in local.inner_defaults() {
            machine.add_machine_override(default.plugin_type_name(), default.default_key())?;
        }
        Ok(machine)
    }
}
