//! Single plugin type lookup

use crate::context::CommandContext;
use crate::error::Result;

/// Run the lookup command
pub fn run_lookup(ctx: &CommandContext, plugin_type: &str) -> Result<()> {
    let machine = ctx.machine()?;
    let key = machine.default_key(plugin_type)?;
    tracing::debug!(
        machine = machine.machine_name(),
        plugin_type,
        key,
        "Resolved default"
    );
    println!("{}", key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use defaults_core::{Error, Manifest, OverrideConfig};

    fn ctx() -> CommandContext {
        let manifest = Manifest::parse(
            r#"
[machines.HOST1.defaults]
ILogger = "Console"
"#,
        )
        .unwrap();
        CommandContext::new(
            OverrideConfig::from_manifest(&manifest).unwrap(),
            Some("HOST1"),
            None,
        )
    }

    #[test]
    fn test_lookup_known_plugin_type() {
        assert!(run_lookup(&ctx(), "ILogger").is_ok());
    }

    #[test]
    fn test_lookup_missing_plugin_type() {
        assert!(matches!(
            run_lookup(&ctx(), "ICache"),
            Err(CliError::Core(Error::LookupMiss { .. }))
        ));
    }
}
