//! Loading profiles and machines from configuration files
//!
//! # Configuration Hierarchy
//!
//! Manifests are loaded and merged in this order:
//!
//! 1. **Global defaults** - `~/.config/plugin-defaults/defaults.toml`
//! 2. **Project manifest** - `defaults.toml`, or any path given explicitly
//!
//! # Format
//!
//! ```toml
//! [profiles.Test]
//! ILogger = "Null"
//!
//! [machines.HOST1]
//! profile = "Test"
//!
//! [machines.HOST1.defaults]
//! ILogger = "Console"
//! IMailer = "Smtp"
//! ```
//!
//! # Example
//!
//! ```ignore
//! use defaults_core::config::ConfigResolver;
//!
//! let config = ConfigResolver::new("defaults.toml").resolve()?;
//! let machine = config.build_machine("HOST1")?;
//! println!("{}", machine.default_key("ILogger")?);
//! ```

mod manifest;
mod registry;
mod resolver;

pub use manifest::{MachineSection, Manifest};
pub use registry::OverrideConfig;
pub use resolver::{ConfigResolver, MANIFEST_FILE};
