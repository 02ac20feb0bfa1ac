//! Saturation/value coordinates and the geometry they are measured against.
//!
//! Orientation convention for the whole crate: origin at the top-left of the
//! field, saturation grows to the right, value grows upward (so value runs
//! against screen-space `y`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::interaction::normalize::normalize;

/// A point on the saturation/value plane. Both channels live in `[0, 1]`.
///
/// Fields are public because the current coordinate is owned by the host;
/// use [`ColorCoordinate::new`] when the inputs may be out of range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorCoordinate {
    /// Color purity, 0 at the left edge and 1 at the right edge.
    pub saturation: f32,
    /// Brightness, 1 at the top edge and 0 at the bottom edge.
    pub value: f32,
}

impl ColorCoordinate {
    /// Build a coordinate, clamping both channels into `[0, 1]`.
    pub fn new(saturation: f32, value: f32) -> Self {
        Self {
            saturation: normalize(saturation),
            value: normalize(value),
        }
    }

    /// Whether both channels are inside `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.saturation) && (0.0..=1.0).contains(&self.value)
    }
}

impl Default for ColorCoordinate {
    /// Fully saturated, full brightness.
    fn default() -> Self {
        Self {
            saturation: 1.0,
            value: 1.0,
        }
    }
}

/// Pixel size of the interactive rectangle.
///
/// Never validated: a zero or negative dimension is a caller contract
/// violation that still produces clamped (if meaningless) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldGeometry {
    pub width: f32,
    pub height: f32,
}

impl FieldGeometry {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` when either dimension is non-positive or non-finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self::new(200.0, 256.0)
    }
}

/// Which field dimension normalizes vertical drag displacement.
///
/// Saturation always divides horizontal displacement by the field width.
/// For value, existing pickers disagree: some divide vertical displacement
/// by the height, others by the width. The choice is left to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueAxisReference {
    /// Dragging the full field height sweeps value from 1 to 0.
    #[default]
    Height,
    /// Vertical drag uses the same pixels-per-unit as horizontal drag.
    Width,
}

impl ValueAxisReference {
    /// Pixel length that corresponds to a full unit of value.
    pub fn length(self, geometry: FieldGeometry) -> f32 {
        match self {
            Self::Height => geometry.height,
            Self::Width => geometry.width,
        }
    }
}

/// Wrap a hue in degrees into `[0, 360)`. Non-finite hues become 0.
pub fn wrap_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_channels() {
        let c = ColorCoordinate::new(-0.2, 1.7);
        assert_eq!(c, ColorCoordinate { saturation: 0.0, value: 1.0 });
        assert!(c.is_normalized());
    }

    #[test]
    fn test_out_of_range_literal_is_not_normalized() {
        let c = ColorCoordinate { saturation: 1.2, value: 0.5 };
        assert!(!c.is_normalized());
    }

    #[test]
    fn test_degenerate_geometry() {
        assert!(!FieldGeometry::new(200.0, 256.0).is_degenerate());
        assert!(FieldGeometry::new(0.0, 256.0).is_degenerate());
        assert!(FieldGeometry::new(200.0, -1.0).is_degenerate());
        assert!(FieldGeometry::new(f32::INFINITY, 10.0).is_degenerate());
        assert!(FieldGeometry::new(f32::NAN, 10.0).is_degenerate());
    }

    #[test]
    fn test_value_axis_length() {
        let g = FieldGeometry::new(200.0, 256.0);
        assert_eq!(ValueAxisReference::Height.length(g), 256.0);
        assert_eq!(ValueAxisReference::Width.length(g), 200.0);
    }

    #[test]
    fn test_value_axis_serde_names() {
        let json = serde_json::to_string(&ValueAxisReference::Width).unwrap();
        assert_eq!(json, "\"width\"");
        let parsed: ValueAxisReference = serde_json::from_str("\"height\"").unwrap();
        assert_eq!(parsed, ValueAxisReference::Height);
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(370.0), 10.0);
        assert_eq!(wrap_hue(-90.0), 270.0);
    }

    #[test]
    fn test_wrap_hue_non_finite() {
        assert_eq!(wrap_hue(f32::NAN), 0.0);
        assert_eq!(wrap_hue(f32::INFINITY), 0.0);
        assert_eq!(wrap_hue(f32::NEG_INFINITY), 0.0);
    }
}
