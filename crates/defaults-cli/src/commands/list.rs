//! List commands for profiles and machines

use colored::Colorize;

use crate::context::CommandContext;
use crate::error::Result;

/// Run the profiles command
pub fn run_profiles(ctx: &CommandContext) -> Result<()> {
    print_names(&ctx.config.profile_names(), "profiles")
}

/// Run the machines command
pub fn run_machines(ctx: &CommandContext) -> Result<()> {
    print_names(&ctx.config.machine_names(), "machines")
}

fn print_names(names: &[String], what: &str) -> Result<()> {
    if names.is_empty() {
        println!("{}", format!("No {} declared.", what).dimmed());
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use defaults_core::OverrideConfig;

    #[test]
    fn test_list_empty_config_runs() {
        let ctx = CommandContext::new(OverrideConfig::new(), None, None);
        assert!(run_profiles(&ctx).is_ok());
        assert!(run_machines(&ctx).is_ok());
    }
}
