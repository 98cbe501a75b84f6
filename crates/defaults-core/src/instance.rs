//! The leaf value type: one plugin type paired with its default instance key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable `(plugin type, default key)` pair.
///
/// Ordering compares the plugin type name first (byte-wise), then the
/// default key, so sorted listings are deterministic regardless of the
/// order overrides were registered in.
///
/// # Example
///
/// ```
/// use defaults_core::InstanceDefault;
///
/// let mut defaults = vec![
///     InstanceDefault::new("ILogger", "Console"),
///     InstanceDefault::new("ICache", "Memory"),
/// ];
/// defaults.sort();
/// assert_eq!(defaults[0].plugin_type_name(), "ICache");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceDefault {
    #[serde(rename = "plugin_type")]
    plugin_type_name: String,
    default_key: String,
}

impl InstanceDefault {
    pub fn new(plugin_type_name: impl Into<String>, default_key: impl Into<String>) -> Self {
        Self {
            plugin_type_name: plugin_type_name.into(),
            default_key: default_key.into(),
        }
    }

    /// The plugin type this default applies to
    pub fn plugin_type_name(&self) -> &str {
        &self.plugin_type_name
    }

    /// The key of the instance used by default for the plugin type
    pub fn default_key(&self) -> &str {
        &self.default_key
    }
}

impl fmt::Display for InstanceDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.plugin_type_name, self.default_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let default = InstanceDefault::new("IMailer", "Smtp");
        assert_eq!(default.plugin_type_name(), "IMailer");
        assert_eq!(default.default_key(), "Smtp");
    }

    #[test]
    fn orders_by_plugin_type_before_key() {
        let a = InstanceDefault::new("IA", "Zeta");
        let b = InstanceDefault::new("IB", "Alpha");
        assert!(a < b);

        let c = InstanceDefault::new("IA", "Alpha");
        assert!(c < a);
    }

    #[test]
    fn ordering_is_ordinal() {
        // Uppercase sorts before lowercase in byte order
        let upper = InstanceDefault::new("Zebra", "x");
        let lower = InstanceDefault::new("apple", "x");
        assert!(upper < lower);
    }

    #[test]
    fn display_shows_pair() {
        let default = InstanceDefault::new("ILogger", "Console");
        assert_eq!(default.to_string(), "ILogger -> Console");
    }

    #[test]
    fn serializes_with_plugin_type_field() {
        let default = InstanceDefault::new("ILogger", "Null");
        let json = serde_json::to_value(&default).unwrap();
        assert_eq!(json["plugin_type"], "ILogger");
        assert_eq!(json["default_key"], "Null");
    }
}
