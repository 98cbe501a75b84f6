//! Layered resolution of default plugin instances
//!
//! For every plugin type (an abstract capability such as `ILogger`) this
//! crate answers which concrete instance key is the default on a given
//! machine. Two layers take part:
//!
//! - **Profile**: a named, shareable bundle of overrides (e.g. "Test")
//! - **Machine**: the host's own overrides
//!
//! Profile entries win over machine entries for the same plugin type.
//!
//! ```text
//!            lookup("ILogger")
//!                    |
//!   +----------------+-------------------+
//!   | profile 'Test'   ILogger = Null    |  <- consulted first
//!   +------------------------------------+
//!   | machine 'HOST1'  ILogger = Console |
//!   |                  IMailer = Smtp    |
//!   +------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use defaults_core::{InstanceDefault, MachineOverride};
//!
//! let mut machine = MachineOverride::new("HOST1");
//! machine.add_machine_override("ILogger", "Console")?;
//! machine.add_machine_override("ICache", "Memory")?;
//!
//! assert_eq!(machine.default_key("ILogger")?, "Console");
//! assert_eq!(
//!     machine.defaults(),
//!     vec![
//!         InstanceDefault::new("ICache", "Memory"),
//!         InstanceDefault::new("ILogger", "Console"),
//!     ]
//! );
//! # Ok::<(), defaults_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod instance;
pub mod layer;
pub mod machine;
pub mod profile;
pub mod report;

pub use config::{ConfigResolver, Manifest, OverrideConfig};
pub use error::{Error, Result};
pub use instance::InstanceDefault;
pub use layer::DefaultSource;
pub use machine::MachineOverride;
pub use profile::Profile;
pub use report::{DefaultsReport, Origin, ReportEntry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_lookup_miss_displays_plugin_type() {
        let error = Error::LookupMiss {
            plugin_type: "ILogger".to_string(),
        };

        let display = format!("{}", error);
        assert!(
            display.contains("ILogger"),
            "Error display should contain the plugin type, got: {}",
            display
        );
    }

    #[test]
    fn error_duplicate_displays_scope() {
        let error = Error::DuplicateOverride {
            plugin_type: "ILogger".to_string(),
            scope: "machine 'HOST1'".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("ILogger"));
        assert!(display.contains("machine 'HOST1'"));
    }
}
