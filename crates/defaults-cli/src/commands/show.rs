//! Listing of a machine's defaults

use colored::Colorize;
use defaults_core::{DefaultsReport, InstanceDefault};

use crate::context::CommandContext;
use crate::error::Result;

/// Run the show command
pub fn run_show(ctx: &CommandContext, local: bool, json: bool) -> Result<()> {
    let machine = ctx.machine()?;
    let defaults = if local {
        let mut inner = machine.inner_defaults();
        inner.sort();
        inner
    } else {
        machine.defaults()
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&defaults)?);
        return Ok(());
    }

    print_defaults(&defaults);
    Ok(())
}

/// Run the report command
pub fn run_report(ctx: &CommandContext, json: bool) -> Result<()> {
    let report = DefaultsReport::for_machine(&ctx.machine()?);

    if json {
        println!("{}", serde_json::to_string_pretty(&report.to_json()?)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

fn print_defaults(defaults: &[InstanceDefault]) {
    if defaults.is_empty() {
        println!("{}", "No defaults configured.".dimmed());
        return;
    }

    for default in defaults {
        println!(
            "  {:<24} {}",
            default.plugin_type_name().green(),
            default.default_key()
        );
    }
}
