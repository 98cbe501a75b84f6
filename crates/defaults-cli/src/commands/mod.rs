//! Command implementations for defaults-cli

pub mod list;
pub mod lookup;
pub mod show;

pub use list::{run_machines, run_profiles};
pub use lookup::run_lookup;
pub use show::{run_report, run_show};
