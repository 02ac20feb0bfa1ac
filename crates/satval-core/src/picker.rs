//! Stateful picker for hosts that don't keep their own color state.
//!
//! [`SatValPicker`] plays the host's part around a [`SessionController`]: it
//! owns the current coordinate and hue, feeds the coordinate in at drag
//! start, adopts every emitted coordinate, and refreshes the indicator fill
//! through the color-math collaborator once per change.

use crate::collaborators::color_math::{ColorMath, PaletteColorMath};
use crate::collaborators::render::{PickerFrame, RenderSink};
use crate::config::PickerConfig;
use crate::coordinate::{ColorCoordinate, FieldGeometry, wrap_hue};
use crate::error::PickerError;
use crate::interaction::gesture::{GestureState, PressInput};
use crate::interaction::session::SessionController;
use crate::interaction::sinks::PickerSink;

#[derive(Debug)]
pub struct SatValPicker<S = (), M = PaletteColorMath> {
    config: PickerConfig,
    controller: SessionController<S>,
    current: ColorCoordinate,
    math: M,
    hue_hex: String,
    fill_hex: String,
}

impl SatValPicker {
    pub fn new(config: PickerConfig) -> Self {
        let config = config.sanitized();
        let controller = SessionController::new(config.geometry(), config.value_axis);
        let current = config.coordinate();
        let math = PaletteColorMath;
        Self {
            hue_hex: math.pure_hue_hex(config.hue),
            fill_hex: math.hsv_to_hex(config.hue, current),
            config,
            controller,
            current,
            math,
        }
    }
}

impl<S: PickerSink, M: ColorMath> SatValPicker<S, M> {
    /// Forward events to `sinks` in addition to tracking them.
    pub fn with_sinks<T: PickerSink>(self, sinks: T) -> SatValPicker<T, M> {
        SatValPicker {
            config: self.config,
            controller: self.controller.with_sinks(sinks),
            current: self.current,
            math: self.math,
            hue_hex: self.hue_hex,
            fill_hex: self.fill_hex,
        }
    }

    /// Swap the color-math collaborator. Cached colors are recomputed.
    pub fn with_color_math<N: ColorMath>(self, math: N) -> SatValPicker<S, N> {
        SatValPicker {
            hue_hex: math.pure_hue_hex(self.config.hue),
            fill_hex: math.hsv_to_hex(self.config.hue, self.current),
            config: self.config,
            controller: self.controller,
            current: self.current,
            math,
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn controller(&self) -> &SessionController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SessionController<S> {
        &mut self.controller
    }

    pub fn current(&self) -> ColorCoordinate {
        self.current
    }

    pub fn hue(&self) -> f32 {
        self.config.hue
    }

    /// Indicator fill for the current coordinate.
    pub fn indicator_fill(&self) -> &str {
        &self.fill_hex
    }

    /// Overwrite the current coordinate from outside (e.g. a text input).
    ///
    /// A drag in progress keeps the origin it captured at start.
    pub fn set_coordinate(&mut self, coordinate: ColorCoordinate) {
        self.commit(ColorCoordinate::new(coordinate.saturation, coordinate.value));
    }

    pub fn set_hue(&mut self, hue: f32) {
        let hue = wrap_hue(hue);
        if hue != self.config.hue {
            self.config.hue = hue;
            self.hue_hex = self.math.pure_hue_hex(hue);
            self.fill_hex = self.math.hsv_to_hex(hue, self.current);
        }
    }

    pub fn set_geometry(&mut self, geometry: FieldGeometry) {
        self.config.width = geometry.width;
        self.config.height = geometry.height;
        self.controller.set_geometry(geometry);
    }

    pub fn press(&mut self, input: PressInput) -> Result<ColorCoordinate, PickerError> {
        let coordinate = self.controller.press(input)?;
        self.commit(coordinate);
        Ok(coordinate)
    }

    /// Start a drag from the current coordinate.
    pub fn drag_start(&mut self, gesture: GestureState) -> Result<ColorCoordinate, PickerError> {
        let coordinate = self.controller.drag_start(self.current, gesture)?;
        self.commit(coordinate);
        Ok(coordinate)
    }

    pub fn drag_move(&mut self, gesture: GestureState) -> Result<ColorCoordinate, PickerError> {
        let coordinate = self.controller.drag_move(gesture)?;
        self.commit(coordinate);
        Ok(coordinate)
    }

    pub fn drag_end(&mut self, gesture: GestureState) -> Result<ColorCoordinate, PickerError> {
        let coordinate = self.controller.drag_end(gesture)?;
        self.commit(coordinate);
        Ok(coordinate)
    }

    pub fn drag_terminate(
        &mut self,
        gesture: GestureState,
    ) -> Result<ColorCoordinate, PickerError> {
        let coordinate = self.controller.drag_terminate(gesture)?;
        self.commit(coordinate);
        Ok(coordinate)
    }

    /// Describe the current state for a renderer.
    pub fn frame(&self) -> PickerFrame {
        PickerFrame::new(
            self.current,
            self.config.geometry(),
            self.config.frame_style(),
            self.hue_hex.clone(),
            self.fill_hex.clone(),
        )
    }

    pub fn render_to(&self, sink: &mut impl RenderSink) {
        sink.render(&self.frame());
    }

    fn commit(&mut self, coordinate: ColorCoordinate) {
        if coordinate != self.current {
            self.current = coordinate;
            self.fill_hex = self.math.hsv_to_hex(self.config.hue, coordinate);
        }
    }
}
