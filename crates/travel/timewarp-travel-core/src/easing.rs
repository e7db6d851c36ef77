//! Easing helpers for the travel spin.

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Decelerating cubic: `1 - (1-u)^3`. Input is clamped to `[0,1]`.
#[inline]
pub fn ease_out_cubic(u: f32) -> f32 {
    let inv = 1.0 - u.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
