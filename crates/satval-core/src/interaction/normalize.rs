//! Unit-interval clamping.
//!
//! Every saturation and value leaving this crate passes through
//! [`normalize`], which is what keeps emitted coordinates inside `[0, 1]`
//! however far the pointer strays outside the field.

/// Clamp `x` into the closed unit interval.
///
/// Returns `0.0` for `x <= 0`, `1.0` for `x >= 1`, and `x` otherwise.
/// `NaN` (e.g. `0 / 0` from a zero-sized field) maps to `0.0`.
pub fn normalize(x: f32) -> f32 {
    if x >= 1.0 {
        1.0
    } else if x > 0.0 {
        x
    } else {
        0.0
    }
}
