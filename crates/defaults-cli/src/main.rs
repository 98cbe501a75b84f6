//! Default plugin instance CLI
//!
//! Resolves which instance is the default for each plugin type on a
//! machine, from the global and project manifests.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::CommandContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command.clone() else {
        println!("{} Default plugin instances", "defaults".green().bold());
        println!();
        println!("Run {} for available commands.", "defaults --help".cyan());
        return Ok(());
    };

    let ctx = CommandContext::load(&cli)?;
    execute_command(&ctx, command)
}

fn execute_command(ctx: &CommandContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Lookup { plugin_type } => commands::run_lookup(ctx, &plugin_type),
        Commands::Show { local, json } => commands::run_show(ctx, local, json),
        Commands::Report { json } => commands::run_report(ctx, json),
        Commands::Profiles => commands::run_profiles(ctx),
        Commands::Machines => commands::run_machines(ctx),
    }
}
