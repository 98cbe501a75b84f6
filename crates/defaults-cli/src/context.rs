//! Loaded configuration plus the machine selection from the command line

use defaults_core::{ConfigResolver, MachineOverride, OverrideConfig};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Everything a command needs to resolve defaults
pub struct CommandContext {
    pub config: OverrideConfig,
    machine: Option<String>,
    profile: Option<String>,
}

impl CommandContext {
    /// Resolve the manifests named by the command line
    pub fn load(cli: &Cli) -> Result<Self> {
        let resolver = match &cli.global_config_dir {
            Some(dir) => ConfigResolver::with_global_config_dir(&cli.config, dir),
            None => ConfigResolver::new(&cli.config),
        };
        if !resolver.has_project_config() {
            tracing::debug!(config = ?cli.config, "Project manifest not found");
        }

        Ok(Self {
            config: resolver.resolve()?,
            machine: cli.machine.clone(),
            profile: cli.profile.clone(),
        })
    }

    #[cfg(test)]
    pub fn new(config: OverrideConfig, machine: Option<&str>, profile: Option<&str>) -> Self {
        Self {
            config,
            machine: machine.map(str::to_string),
            profile: profile.map(str::to_string),
        }
    }

    /// Build the selected machine with the selected profile
    pub fn machine(&self) -> Result<MachineOverride> {
        let name = self
            .machine
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| CliError::user("No machine given. Pass --machine or set HOSTNAME."))?;

        let machine = match self.profile.as_deref() {
            Some(profile) => self.config.build_machine_with_profile(name, profile)?,
            None => self.config.build_machine(name)?,
        };
        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defaults_core::Manifest;

    fn config() -> OverrideConfig {
        let manifest = Manifest::parse(
            r#"
[profiles.Test]
ILogger = "Null"

[machines.HOST1.defaults]
ILogger = "Console"
"#,
        )
        .unwrap();
        OverrideConfig::from_manifest(&manifest).unwrap()
    }

    #[test]
    fn machine_requires_name() {
        let ctx = CommandContext::new(config(), None, None);
        assert!(matches!(ctx.machine(), Err(CliError::User { .. })));
    }

    #[test]
    fn machine_uses_profile_override() {
        let ctx = CommandContext::new(config(), Some("HOST1"), Some("Test"));
        let machine = ctx.machine().unwrap();
        assert_eq!(machine.default_key("ILogger").unwrap(), "Null");
    }

    #[test]
    fn machine_without_profile_override() {
        let ctx = CommandContext::new(config(), Some("HOST1"), None);
        let machine = ctx.machine().unwrap();
        assert_eq!(machine.default_key("ILogger").unwrap(), "Console");
    }
}
