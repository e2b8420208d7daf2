//! Polar-to-screen transform
//!
//! All math is done in `f32` and rounded half away from zero at the end,
//! matching what a C `roundf` would produce on the target.

use core::f32::consts::PI;

use super::vertex::Vertex;

/// Degrees in a half turn
const HALF_TURN_DEG: f32 = 180.0;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(angle_deg: f32) -> f32 {
    angle_deg * (PI / HALF_TURN_DEG)
}

/// Round a floating point screen coordinate to a pixel index
///
/// Callers guarantee the value lies within `0..=u16::MAX`; anything
/// outside saturates at the range bounds.
#[inline]
pub fn round_to_pixel(value: f32) -> u16 {
    libm::roundf(value) as u16
}

/// Project a point `length` pixels from `center` at `angle_deg`
///
/// 0° points right, 90° points down (screen y grows downward).
pub fn project(center: Vertex, length: f32, angle_deg: f32) -> Vertex {
    let rad = deg_to_rad(angle_deg);
    let cos = libm::cosf(rad);
    let sin = libm::sinf(rad);

    Vertex {
        x: round_to_pixel(cos * length + center.x as f32),
        y: round_to_pixel(sin * length + center.y as f32),
    }
}
