//! Configuration report for a machine
//!
//! The `DefaultsReport` lists the defaults in force on a machine together
//! with the layer each one came from, in a form suitable for terminals and
//! for tooling.

use crate::{InstanceDefault, MachineOverride};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Which layer supplied an effective default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Profile,
    Machine,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Profile => write!(f, "profile"),
            Origin::Machine => write!(f, "machine"),
        }
    }
}

/// One effective default and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub default: InstanceDefault,
    pub origin: Origin,
}

/// Snapshot of a machine's effective defaults
///
/// # Example
///
/// ```
/// use defaults_core::{DefaultsReport, MachineOverride};
///
/// let mut machine = MachineOverride::new("HOST1");
/// machine.add_machine_override("ILogger", "Console").unwrap();
///
/// let report = DefaultsReport::for_machine(&machine);
/// assert_eq!(report.entries.len(), 1);
/// assert!(report.shadowed.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsReport {
    pub machine: String,

    /// Empty when the machine has no profile
    pub profile: String,

    /// Effective defaults, sorted by plugin type
    pub entries: Vec<ReportEntry>,

    /// Machine overrides hidden by a profile entry, sorted by plugin type
    pub shadowed: Vec<InstanceDefault>,
}

impl DefaultsReport {
    pub fn for_machine(machine: &MachineOverride) -> Self {
        let profile = machine.profile();

        let entries = machine
            .defaults()
            .into_iter()
            .map(|default| {
                let origin = if profile.has_override(default.plugin_type_name()) {
                    Origin::Profile
                } else {
                    Origin::Machine
                };
                ReportEntry { default, origin }
            })
            .collect();

        let mut shadowed: Vec<InstanceDefault> = machine
            .inner_defaults()
            .into_iter()
            .filter(|default| profile.has_override(default.plugin_type_name()))
            .collect();
        shadowed.sort();

        Self {
            machine: machine.machine_name().to_string(),
            profile: machine.profile_name().to_string(),
            entries,
            shadowed,
        }
    }

    pub fn to_json(&self) -> crate::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl fmt::Display for DefaultsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Machine: {}", self.machine)?;
        if self.profile.is_empty() {
            writeln!(f, "Profile: (none)")?;
        } else {
            writeln!(f, "Profile: {}", self.profile)?;
        }

        writeln!(f)?;
        if self.entries.is_empty() {
            writeln!(f, "No defaults configured.")?;
        }
        for entry in &self.entries {
            writeln!(
                f,
                "  {:<24} {:<24} [{}]",
                entry.default.plugin_type_name(),
                entry.default.default_key(),
                entry.origin
            )?;
        }

        if !self.shadowed.is_empty() {
            writeln!(f)?;
            writeln!(f, "Shadowed by profile:")?;
            for default in &self.shadowed {
                writeln!(f, "  {}", default)?;
            }
        }
        Ok(())
    }
}
