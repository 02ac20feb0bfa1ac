//! Drag/press session controller.
//!
//! Maps taps and drags on the saturation/value field to [`ColorCoordinate`]s
//! and sequences the drag lifecycle.
//!
//! ```text
//!            Start                 Move
//!   Idle ───────────→ Dragging ◀──────┐
//!    ▲                 │  │  └────────┘
//!    │        End      │  │
//!    ├─────────────────┘  │
//!    │      Terminate     │
//!    └────────────────────┘
//! ```
//!
//! # Formulas
//! Tap at local position `(x, y)`:
//! ```text
//!   saturation = normalize(x / width)
//!   value      = 1 − normalize(y / height)
//! ```
//!
//! Drag with cumulative displacement `(dx, dy)` from the origin captured at
//! Start:
//! ```text
//!   saturation = normalize(origin.saturation + dx / width)
//!   value      = normalize(origin.value − dy / value_axis_length)
//! ```
//! where `value_axis_length` is the height or the width depending on
//! [`ValueAxisReference`].

use glam::Vec2;

use crate::coordinate::{ColorCoordinate, FieldGeometry, ValueAxisReference};
use crate::error::PickerError;
use crate::interaction::gesture::{
    DragEvent, DragPhase, GestureEvent, GestureState, PressEvent, PressInput,
};
use crate::interaction::normalize::normalize;
use crate::interaction::sinks::PickerSink;

/// Map a tap position (local to the field's top-left) to a coordinate.
pub fn press_coordinate(location: Vec2, geometry: FieldGeometry) -> ColorCoordinate {
    ColorCoordinate {
        saturation: normalize(location.x / geometry.width),
        value: 1.0 - normalize(location.y / geometry.height),
    }
}

/// Apply a cumulative drag displacement to the coordinate captured at Start.
pub fn drag_coordinate(
    origin: ColorCoordinate,
    displacement: Vec2,
    geometry: FieldGeometry,
    value_axis: ValueAxisReference,
) -> ColorCoordinate {
    ColorCoordinate {
        saturation: normalize(origin.saturation + displacement.x / geometry.width),
        value: normalize(origin.value - displacement.y / value_axis.length(geometry)),
    }
}

/// Tracks one field's taps and drag sessions and notifies a [`PickerSink`].
///
/// The controller holds no color state of its own beyond the drag origin:
/// the host passes its current coordinate in at Start and decides what to
/// keep from the emitted events.
#[derive(Debug)]
pub struct SessionController<S = ()> {
    geometry: FieldGeometry,
    value_axis: ValueAxisReference,
    /// `Some` while dragging. Written only at Start.
    origin: Option<ColorCoordinate>,
    sinks: S,
}

impl SessionController<()> {
    /// Create an idle controller with no subscribers.
    pub fn new(geometry: FieldGeometry, value_axis: ValueAxisReference) -> Self {
        warn_if_degenerate(geometry);
        Self {
            geometry,
            value_axis,
            origin: None,
            sinks: (),
        }
    }
}

impl<S: PickerSink> SessionController<S> {
    /// Replace the sink, keeping geometry and any in-progress drag.
    pub fn with_sinks<T: PickerSink>(self, sinks: T) -> SessionController<T> {
        SessionController {
            geometry: self.geometry,
            value_axis: self.value_axis,
            origin: self.origin,
            sinks,
        }
    }

    pub fn sinks(&self) -> &S {
        &self.sinks
    }

    pub fn sinks_mut(&mut self) -> &mut S {
        &mut self.sinks
    }

    pub fn into_sinks(self) -> S {
        self.sinks
    }

    pub fn geometry(&self) -> FieldGeometry {
        self.geometry
    }

    /// Update the field size, e.g. after a layout pass.
    ///
    /// Takes effect for the next computed coordinate, including moves of a
    /// drag already in progress.
    pub fn set_geometry(&mut self, geometry: FieldGeometry) {
        if geometry != self.geometry {
            warn_if_degenerate(geometry);
            self.geometry = geometry;
        }
    }

    pub fn value_axis(&self) -> ValueAxisReference {
        self.value_axis
    }

    pub fn set_value_axis(&mut self, value_axis: ValueAxisReference) {
        self.value_axis = value_axis;
    }

    /// Coordinate captured at the start of the current drag, if any.
    pub fn drag_origin(&self) -> Option<ColorCoordinate> {
        self.origin
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    // ── Responder policy ────────────────────────────────────────────────

    /// The field claims the pointer as soon as it is touched.
    pub const fn claims_on_start(&self) -> bool {
        true
    }

    /// The field claims the pointer when a move begins over it.
    pub const fn claims_on_move(&self) -> bool {
        true
    }

    /// Once a drag is running the field asks to keep it. The gesture system
    /// may still take it away, which arrives as [`DragPhase::Terminate`].
    pub const fn grants_termination(&self) -> bool {
        false
    }

    /// Native (platform) responders are blocked while the field owns a drag.
    pub const fn blocks_native_responder(&self) -> bool {
        true
    }

    // ── Entry points ────────────────────────────────────────────────────

    /// Handle a tap. Independent of any drag in progress.
    pub fn press(&mut self, input: PressInput) -> Result<ColorCoordinate, PickerError> {
        let coordinate = press_coordinate(input.location, self.geometry);
        tracing::trace!(?coordinate, "press");
        self.sinks
            .on_press(&PressEvent { coordinate, input })
            .map_err(PickerError::Sink)?;
        Ok(coordinate)
    }

    /// Begin a drag from the host's `current` coordinate.
    ///
    /// A Start while already dragging replaces the previous origin.
    pub fn drag_start(
        &mut self,
        current: ColorCoordinate,
        gesture: GestureState,
    ) -> Result<ColorCoordinate, PickerError> {
        if let Some(previous) = self.origin.replace(current) {
            tracing::debug!(?previous, ?current, "drag restarted before end; origin replaced");
        }
        self.emit(DragPhase::Start, current, gesture)
    }

    pub fn drag_move(&mut self, gesture: GestureState) -> Result<ColorCoordinate, PickerError> {
        let origin = self.active_origin(DragPhase::Move)?;
        self.emit(DragPhase::Move, origin, gesture)
    }

    /// Finish the drag on release.
    pub fn drag_end(&mut self, gesture: GestureState) -> Result<ColorCoordinate, PickerError> {
        let origin = self.active_origin(DragPhase::End)?;
        self.origin = None;
        self.emit(DragPhase::End, origin, gesture)
    }

    /// Finish the drag because the gesture system took it away.
    pub fn drag_terminate(
        &mut self,
        gesture: GestureState,
    ) -> Result<ColorCoordinate, PickerError> {
        let origin = self.active_origin(DragPhase::Terminate)?;
        self.origin = None;
        self.emit(DragPhase::Terminate, origin, gesture)
    }

    /// Dispatch one event from a gesture stream.
    pub fn handle(&mut self, event: GestureEvent) -> Result<ColorCoordinate, PickerError> {
        match event {
            GestureEvent::Press(input) => self.press(input),
            GestureEvent::Start { current, gesture } => self.drag_start(current, gesture),
            GestureEvent::Move(gesture) => self.drag_move(gesture),
            GestureEvent::End(gesture) => self.drag_end(gesture),
            GestureEvent::Terminate(gesture) => self.drag_terminate(gesture),
        }
    }

    fn active_origin(&self, phase: DragPhase) -> Result<ColorCoordinate, PickerError> {
        self.origin.ok_or_else(|| {
            tracing::warn!("{phase} without a preceding drag start; ignored");
            PickerError::NotDragging { phase }
        })
    }

    fn emit(
        &mut self,
        phase: DragPhase,
        origin: ColorCoordinate,
        gesture: GestureState,
    ) -> Result<ColorCoordinate, PickerError> {
        let coordinate =
            drag_coordinate(origin, gesture.displacement, self.geometry, self.value_axis);
        tracing::debug!(%phase, ?coordinate, displacement = ?gesture.displacement, "drag");
        self.sinks
            .on_drag(&DragEvent {
                phase,
                coordinate,
                gesture,
            })
            .map_err(PickerError::Sink)?;
        Ok(coordinate)
    }
}

fn warn_if_degenerate(geometry: FieldGeometry) {
    if geometry.is_degenerate() {
        tracing::warn!(
            width = geometry.width,
            height = geometry.height,
            "degenerate field geometry; coordinates will be clamped but meaningless"
        );
    }
}
