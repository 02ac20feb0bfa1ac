//! HSV → display color conversion.

use palette::{FromColor, Hsl, Hsv, Srgb};

use crate::coordinate::ColorCoordinate;

/// Converts hue/saturation/value into a display color string.
///
/// Hex strings are lowercase `#rrggbb`.
pub trait ColorMath {
    /// Fill color for the indicator at `coordinate` under `hue` (degrees).
    fn hsv_to_hex(&self, hue: f32, coordinate: ColorCoordinate) -> String;

    /// The fully saturated hue at HSL lightness 0.5, used as the right-hand
    /// stop of the field's horizontal gradient.
    fn pure_hue_hex(&self, hue: f32) -> String;
}

/// [`ColorMath`] backed by the `palette` crate, in the sRGB encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteColorMath;

impl ColorMath for PaletteColorMath {
    fn hsv_to_hex(&self, hue: f32, coordinate: ColorCoordinate) -> String {
        let hsv: Hsv = Hsv::new(hue, coordinate.saturation, coordinate.value);
        srgb_hex(Srgb::from_color(hsv))
    }

    fn pure_hue_hex(&self, hue: f32) -> String {
        let hsl: Hsl = Hsl::new(hue, 1.0, 0.5);
        srgb_hex(Srgb::from_color(hsl))
    }
}

fn srgb_hex(rgb: Srgb) -> String {
    let rgb: Srgb<u8> = rgb.into_format();
    format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        let math = PaletteColorMath;
        let full = ColorCoordinate::new(1.0, 1.0);
        assert_eq!(math.hsv_to_hex(0.0, full), "#ff0000");
        assert_eq!(math.hsv_to_hex(120.0, full), "#00ff00");
        assert_eq!(math.hsv_to_hex(240.0, full), "#0000ff");
    }

    #[test]
    fn test_plane_corners() {
        let math = PaletteColorMath;
        // top-left is white, bottom edge is black, whatever the hue
        assert_eq!(math.hsv_to_hex(200.0, ColorCoordinate::new(0.0, 1.0)), "#ffffff");
        assert_eq!(math.hsv_to_hex(200.0, ColorCoordinate::new(0.0, 0.0)), "#000000");
        assert_eq!(math.hsv_to_hex(200.0, ColorCoordinate::new(1.0, 0.0)), "#000000");
    }

    #[test]
    fn test_pure_hue_matches_full_hsv() {
        let math = PaletteColorMath;
        for hue in [0.0, 60.0, 180.0, 300.0] {
            assert_eq!(
                math.pure_hue_hex(hue),
                math.hsv_to_hex(hue, ColorCoordinate::new(1.0, 1.0)),
                "hue {hue}"
            );
        }
    }
}
