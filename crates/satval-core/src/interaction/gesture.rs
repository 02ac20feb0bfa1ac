//! Raw gesture payloads and the events emitted for them.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::coordinate::ColorCoordinate;

/// Gesture state reported by the gesture-recognition collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    /// Pointer offset since the drag started. Cumulative, not per-event.
    pub displacement: Vec2,
    /// Latest pointer position in the collaborator's own coordinate space.
    pub position: Vec2,
    /// Pointer velocity in pixels per second, zero when not reported.
    pub velocity: Vec2,
}

impl GestureState {
    /// Gesture state carrying only a cumulative displacement.
    pub fn from_displacement(dx: f32, dy: f32) -> Self {
        Self {
            displacement: Vec2::new(dx, dy),
            ..Default::default()
        }
    }
}

/// A tap as delivered by the gesture collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PressInput {
    /// Position relative to the field's top-left corner, in pixels.
    pub location: Vec2,
    /// Position relative to the page/window, when the collaborator knows it.
    pub page_location: Option<Vec2>,
}

impl PressInput {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            location: Vec2::new(x, y),
            page_location: None,
        }
    }
}

/// Lifecycle phase of a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragPhase {
    Start,
    Move,
    End,
    /// The gesture was taken away by the collaborator rather than released.
    Terminate,
}

impl DragPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "drag start",
            Self::Move => "drag move",
            Self::End => "drag end",
            Self::Terminate => "drag terminate",
        }
    }

    /// Whether this phase closes the session.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::End | Self::Terminate)
    }
}

impl fmt::Display for DragPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Emitted once per tap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressEvent {
    pub coordinate: ColorCoordinate,
    pub input: PressInput,
}

/// Emitted for every drag lifecycle transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragEvent {
    pub phase: DragPhase,
    pub coordinate: ColorCoordinate,
    pub gesture: GestureState,
}

/// Single inbound event stream from the gesture collaborator.
///
/// `Start` carries the coordinate the host currently holds; it becomes the
/// drag origin for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Press(PressInput),
    Start {
        current: ColorCoordinate,
        gesture: GestureState,
    },
    Move(GestureState),
    End(GestureState),
    Terminate(GestureState),
}

impl GestureEvent {
    /// Drag phase for drag events, `None` for taps.
    pub fn phase(&self) -> Option<DragPhase> {
        match self {
            Self::Press(_) => None,
            Self::Start { .. } => Some(DragPhase::Start),
            Self::Move(_) => Some(DragPhase::Move),
            Self::End(_) => Some(DragPhase::End),
            Self::Terminate(_) => Some(DragPhase::Terminate),
        }
    }
}
