//! Picker configuration.
//!
//! Defaults match the stock saturation/value field: a 200×256 field with a
//! 24 px indicator, hue 0, full saturation and value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collaborators::render::FrameStyle;
use crate::coordinate::{ColorCoordinate, FieldGeometry, ValueAxisReference, wrap_hue};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Field width in pixels. Should be > 0; not enforced.
    pub width: f32,
    /// Field height in pixels. Should be > 0; not enforced.
    pub height: f32,
    /// Indicator diameter in pixels.
    pub slider_size: f32,
    pub border_radius: f32,
    /// Hue in degrees. Only affects rendering.
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
    pub value_axis: ValueAxisReference,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 256.0,
            slider_size: 24.0,
            border_radius: 0.0,
            hue: 0.0,
            saturation: 1.0,
            value: 1.0,
            value_axis: ValueAxisReference::default(),
        }
    }
}

impl PickerConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "loaded picker config");
        Ok(config)
    }

    /// Wrap the hue into `[0, 360)` and clamp saturation/value.
    ///
    /// Geometry is left alone; a degenerate field is only reported.
    pub fn sanitized(mut self) -> Self {
        self.hue = wrap_hue(self.hue);
        let coordinate = ColorCoordinate::new(self.saturation, self.value);
        self.saturation = coordinate.saturation;
        self.value = coordinate.value;
        if self.geometry().is_degenerate() {
            tracing::warn!(
                width = self.width,
                height = self.height,
                "picker config has a degenerate field size"
            );
        }
        self
    }

    pub fn geometry(&self) -> FieldGeometry {
        FieldGeometry::new(self.width, self.height)
    }

    pub fn coordinate(&self) -> ColorCoordinate {
        ColorCoordinate::new(self.saturation, self.value)
    }

    pub fn frame_style(&self) -> FrameStyle {
        FrameStyle {
            slider_size: self.slider_size,
            border_radius: self.border_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = PickerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config =
            PickerConfig::from_json_str(r#"{ "width": 300, "value_axis": "width" }"#).unwrap();
        assert_eq!(config.width, 300.0);
        assert_eq!(config.height, 256.0);
        assert_eq!(config.value_axis, ValueAxisReference::Width);
    }

    #[test]
    fn test_out_of_range_values_are_sanitized() {
        let config =
            PickerConfig::from_json_str(r#"{ "hue": 400, "saturation": 2, "value": -1 }"#)
                .unwrap();
        assert_eq!(config.hue, 40.0);
        assert_eq!(config.saturation, 1.0);
        assert_eq!(config.value, 0.0);
    }

    #[test]
    fn test_degenerate_geometry_is_accepted() {
        let config = PickerConfig::from_json_str(r#"{ "width": 0 }"#).unwrap();
        assert!(config.geometry().is_degenerate());
    }

    #[test]
    fn test_parse_error() {
        let err = PickerConfig::from_json_str("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PickerConfig::from_json_file("/nonexistent/satval.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/satval.json"));
    }
}
