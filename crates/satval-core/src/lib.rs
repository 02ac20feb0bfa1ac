//! Satval Core — domain layer for a saturation/value color plane.
//!
//! This crate contains the coordinate mapping, drag/press session tracking,
//! and the narrow contracts for the rendering and color-math collaborators.
//! No GPU or framework dependencies.

pub mod collaborators;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod interaction;
pub mod picker;

// Re-exports for convenience.
pub use collaborators::color_math::{ColorMath, PaletteColorMath};
pub use collaborators::render::{FrameStyle, IndicatorLayout, PickerFrame, RenderSink};
pub use config::PickerConfig;
pub use coordinate::{ColorCoordinate, FieldGeometry, ValueAxisReference};
pub use error::{ConfigError, PickerError};
pub use glam::Vec2;
pub use interaction::gesture::{
    DragEvent, DragPhase, GestureEvent, GestureState, PressEvent, PressInput,
};
pub use interaction::normalize::normalize;
pub use interaction::session::SessionController;
pub use interaction::sinks::{PickerSink, PickerSinks, SinkError, SinkResult};
pub use picker::SatValPicker;
