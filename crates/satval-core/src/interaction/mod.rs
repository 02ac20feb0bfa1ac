//! Pointer interaction — tap mapping, drag sessions, and event sinks.

pub mod gesture;
pub mod normalize;
pub mod session;
pub mod sinks;
