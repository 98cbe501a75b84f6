//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use defaults_core::config::MANIFEST_FILE;
use std::path::PathBuf;

/// Inspect which plugin instances are the defaults on a machine
#[derive(Parser, Debug)]
#[command(name = "defaults")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project manifest to load
    #[arg(short, long, global = true, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Machine to resolve defaults for
    #[arg(short, long, global = true, env = "HOSTNAME")]
    pub machine: Option<String>,

    /// Profile to attach instead of the one the machine declares
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Directory holding the global manifest
    #[arg(long, global = true, env = "PLUGIN_DEFAULTS_CONFIG_DIR", hide = true)]
    pub global_config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the default instance key for a plugin type
    ///
    /// Examples:
    ///   defaults lookup ILogger
    ///   defaults lookup ILogger --machine HOST1 --profile Test
    Lookup {
        /// Plugin type to resolve
        plugin_type: String,
    },

    /// List the defaults in force on the machine
    Show {
        /// Only the machine's own overrides, ignoring the profile
        #[arg(long)]
        local: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show effective defaults with the layer each one comes from
    Report {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List declared profiles
    Profiles,

    /// List declared machines
    Machines,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lookup_with_globals() {
        let cli = Cli::try_parse_from([
            "defaults", "lookup", "ILogger", "-m", "HOST1", "-p", "Test", "-c", "other.toml",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Lookup {
                plugin_type: "ILogger".to_string()
            })
        );
        assert_eq!(cli.machine.as_deref(), Some("HOST1"));
        assert_eq!(cli.profile.as_deref(), Some("Test"));
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn parse_show_flags() {
        let cli = Cli::try_parse_from(["defaults", "show", "--local", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                local: true,
                json: true
            })
        );
        assert_eq!(cli.config, PathBuf::from(MANIFEST_FILE));
    }

    #[test]
    fn lookup_requires_plugin_type() {
        assert!(Cli::try_parse_from(["defaults", "lookup"]).is_err());
    }
}
