//! Render description handed to the rendering collaborator.
//!
//! The field is drawn as two stacked linear gradients: white → pure hue from
//! left to right, then transparent → black from top to bottom. The indicator
//! is a circle whose top-left corner sits at `translate` inside a container
//! that is one indicator-size larger than the field, so its center lands on
//! the selected point.

use glam::Vec2;
use serde::Serialize;

use super::color_math::ColorMath;
use crate::coordinate::{ColorCoordinate, FieldGeometry};

/// Left stop of the horizontal gradient.
pub const HUE_GRADIENT_START: &str = "#ffffff";
/// Top and bottom stops of the vertical shade overlay.
pub const SHADE_GRADIENT: [&str; 2] = ["#00000000", "#000000"];
/// Indicator outline color.
pub const INDICATOR_BORDER: &str = "#ffffff";

/// Visual parameters that do not affect coordinate math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameStyle {
    /// Diameter of the indicator in pixels.
    pub slider_size: f32,
    /// Corner radius of the gradient field.
    pub border_radius: f32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            slider_size: 24.0,
            border_radius: 0.0,
        }
    }
}

/// Placement and look of the draggable indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorLayout {
    /// Offset of the indicator's top-left corner within the container.
    pub translate: Vec2,
    pub size: f32,
    pub corner_radius: f32,
    pub border_width: f32,
    pub fill: String,
    pub border: &'static str,
}

impl IndicatorLayout {
    pub fn new(
        coordinate: ColorCoordinate,
        geometry: FieldGeometry,
        slider_size: f32,
        fill: String,
    ) -> Self {
        Self {
            translate: Vec2::new(
                geometry.width * coordinate.saturation,
                geometry.height * (1.0 - coordinate.value),
            ),
            size: slider_size,
            corner_radius: slider_size / 2.0,
            border_width: slider_size / 10.0,
            fill,
            border: INDICATOR_BORDER,
        }
    }

    /// Indicator center in field-local pixels.
    pub fn center_in_field(&self) -> Vec2 {
        self.translate
    }
}

/// Everything a renderer needs to draw one state of the picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerFrame {
    /// Outer size: field plus one indicator diameter on each axis.
    pub container_size: Vec2,
    pub field: FieldGeometry,
    pub border_radius: f32,
    /// Left → right stops.
    pub hue_gradient: [String; 2],
    /// Top → bottom stops, drawn over `hue_gradient`.
    pub shade_gradient: [&'static str; 2],
    pub indicator: IndicatorLayout,
}

impl PickerFrame {
    /// Build a frame from already-resolved colors.
    pub fn new(
        coordinate: ColorCoordinate,
        geometry: FieldGeometry,
        style: FrameStyle,
        hue_hex: String,
        fill_hex: String,
    ) -> Self {
        Self {
            container_size: geometry.size() + Vec2::splat(style.slider_size),
            field: geometry,
            border_radius: style.border_radius,
            hue_gradient: [HUE_GRADIENT_START.to_owned(), hue_hex],
            shade_gradient: SHADE_GRADIENT,
            indicator: IndicatorLayout::new(coordinate, geometry, style.slider_size, fill_hex),
        }
    }

    /// Build a frame, resolving colors through `math`.
    pub fn compute(
        coordinate: ColorCoordinate,
        hue: f32,
        geometry: FieldGeometry,
        style: FrameStyle,
        math: &impl ColorMath,
    ) -> Self {
        Self::new(
            coordinate,
            geometry,
            style,
            math.pure_hue_hex(hue),
            math.hsv_to_hex(hue, coordinate),
        )
    }
}

/// Receives frames to draw. Outbound only: the picker never reads back.
pub trait RenderSink {
    fn render(&mut self, frame: &PickerFrame);
}

impl<F: FnMut(&PickerFrame)> RenderSink for F {
    fn render(&mut self, frame: &PickerFrame) {
        self(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::color_math::PaletteColorMath;

    #[test]
    fn test_indicator_tracks_coordinate() {
        let g = FieldGeometry::new(200.0, 256.0);
        let layout =
            IndicatorLayout::new(ColorCoordinate::new(0.5, 0.25), g, 24.0, "#000000".into());
        assert_eq!(layout.translate, Vec2::new(100.0, 192.0));
        assert_eq!(layout.corner_radius, 12.0);
        assert!((layout.border_width - 2.4).abs() < 1e-6);
    }

    #[test]
    fn test_frame_compute() {
        let frame = PickerFrame::compute(
            ColorCoordinate::new(1.0, 1.0),
            0.0,
            FieldGeometry::new(200.0, 256.0),
            FrameStyle::default(),
            &PaletteColorMath,
        );
        assert_eq!(frame.container_size, Vec2::new(224.0, 280.0));
        assert_eq!(frame.hue_gradient, ["#ffffff".to_owned(), "#ff0000".to_owned()]);
        assert_eq!(frame.indicator.fill, "#ff0000");
        assert_eq!(frame.indicator.translate, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_closure_render_sink() {
        let mut seen = Vec::new();
        let mut sink = |frame: &PickerFrame| seen.push(frame.indicator.fill.clone());
        let frame = PickerFrame::compute(
            ColorCoordinate::new(0.0, 0.0),
            90.0,
            FieldGeometry::default(),
            FrameStyle::default(),
            &PaletteColorMath,
        );
        sink.render(&frame);
        assert_eq!(seen, ["#000000"]);
    }
}
