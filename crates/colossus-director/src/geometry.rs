//! Plane geometry helpers shared by the pattern executors.
//!
//! Pure functions on glam `Vec2`, angles in degrees unless noted.

use colossus_core::constants::{DEFAULT_AXIS, DEGENERATE_LENGTH_SQ};
use colossus_core::types::Vec2;

/// Rotate `v` counter-clockwise by `degrees`.
pub fn rotate(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Shortest distance from `point` to the segment `a`–`b`.
/// A zero-length segment degrades to point-to-point distance.
pub fn point_segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= DEGENERATE_LENGTH_SQ {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Point at `radius` from `center` along `angle_rad` (0 = +X, counter-clockwise).
pub fn point_on_circle(center: Vec2, angle_rad: f32, radius: f32) -> Vec2 {
    let (sin, cos) = angle_rad.sin_cos();
    center + Vec2::new(cos, sin) * radius
}

/// Unit vector along `v`, or None if `v` is too short to have a direction.
pub fn direction(v: Vec2) -> Option<Vec2> {
    if v.length_squared() <= DEGENERATE_LENGTH_SQ || !v.is_finite() {
        None
    } else {
        Some(v.normalize())
    }
}

/// Unit vector along `v`, falling back to the fixed default axis.
pub fn direction_or_default(v: Vec2) -> Vec2 {
    direction(v).unwrap_or(DEFAULT_AXIS)
}

/// Shot angles for a fan of `count` shots spread evenly across `spread_deg`,
/// inclusive of both edges. A single shot sits on the center line.
pub fn fan_angles(count: u32, spread_deg: f32) -> Vec<f32> {
    let step = if count <= 1 {
        0.0
    } else {
        spread_deg / (count - 1) as f32
    };
    let start = if count <= 1 { 0.0 } else { -spread_deg / 2.0 };
    (0..count).map(|i| start + i as f32 * step).collect()
}
