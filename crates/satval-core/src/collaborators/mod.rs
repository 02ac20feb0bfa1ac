//! Outbound contracts for the rendering and color-math collaborators.
//!
//! The interaction layer never calls into a concrete renderer or color
//! library; hosts plug those in through the traits defined here.

pub mod color_math;
pub mod render;
