//! Ordered override layers
//!
//! A layer is anything that can answer "which default key do you hold for
//! this plugin type". Layers are consulted in order and the first one that
//! holds an override wins, both for single lookups and for merged listings.

use crate::InstanceDefault;
use std::collections::BTreeMap;

/// A single layer of default instance overrides.
pub trait DefaultSource {
    /// Human readable name of the layer, used in logs and reports
    fn source_name(&self) -> String;

    /// The default key this layer holds for `plugin_type`, if any
    fn find_default_key(&self, plugin_type: &str) -> Option<&str>;

    /// Unordered snapshot of every override in this layer
    fn instance_defaults(&self) -> Vec<InstanceDefault>;

    fn has_override(&self, plugin_type: &str) -> bool {
        self.find_default_key(plugin_type).is_some()
    }
}

/// Resolve `plugin_type` against `layers`, first match wins.
pub fn resolve_first<'a>(layers: &[&'a dyn DefaultSource], plugin_type: &str) -> Option<&'a str> {
    layers
        .iter()
        .copied()
        .find_map(|layer| layer.find_default_key(plugin_type))
}

/// Merge all layers into one listing.
///
/// Each plugin type appears once, taken from the earliest layer that
/// defines it. The result is sorted by [`InstanceDefault`] order and is
/// rebuilt on every call.
pub fn merge_layers(layers: &[&dyn DefaultSource]) -> Vec<InstanceDefault> {
    let mut merged: BTreeMap<String, InstanceDefault> = BTreeMap::new();

    for layer in layers {
        for default in layer.instance_defaults() {
            merged
                .entry(default.plugin_type_name().to_string())
                .or_insert(default);
        }
    }

    let mut defaults: Vec<InstanceDefault> = merged.into_values().collect();
    defaults.sort();
    defaults
}
