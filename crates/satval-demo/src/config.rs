//! Application configuration for the demo.

use bevy::prelude::*;
use satval_core::PickerConfig;

/// Environment variable naming a JSON picker config file.
const CONFIG_ENV: &str = "SATVAL_CONFIG";

/// Picker configuration for the demo plane.
#[derive(Resource, Clone, Debug)]
pub struct DemoConfig {
    pub picker: PickerConfig,
}

impl DemoConfig {
    /// Read `SATVAL_CONFIG` if set, falling back to the stock picker.
    pub fn from_env() -> Self {
        let picker = match std::env::var(CONFIG_ENV) {
            Ok(path) => PickerConfig::from_json_file(&path).unwrap_or_else(|e| {
                tracing::warn!("{e}; using default picker config");
                PickerConfig::default()
            }),
            Err(_) => PickerConfig::default(),
        };
        Self { picker }
    }
}
