//! Bevy messages emitted by the saturation/value plane.

use bevy::prelude::*;
use satval_core::{ColorCoordinate, DragPhase};

/// What produced a coordinate change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatValTrigger {
    Press,
    Drag(DragPhase),
}

/// Fired for every coordinate the plane's controller emits.
///
/// `Drag(DragPhase::Terminate)` means the gesture was abandoned; treat the
/// coordinate as the last known value rather than a committed choice.
#[derive(Message, Debug, Clone, Copy)]
pub struct SatValChanged {
    /// The plane (gradient) entity.
    pub source: Entity,
    pub trigger: SatValTrigger,
    pub coordinate: ColorCoordinate,
}
