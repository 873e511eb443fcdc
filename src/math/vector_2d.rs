//! Primitive 2D point and vector operations.
//!
//! All functions are pure and total. Degenerate inputs produce defined
//! values (a zero vector, the line's anchor point) instead of NaNs.

use super::{Point2, Vector2, TOLERANCE};

/// Returns the displacement `to - from`.
#[must_use]
pub fn create_vector(from: &Point2, to: &Point2) -> Vector2 {
    to - from
}

/// Returns the Euclidean norm of `v`.
#[must_use]
pub fn vector_length(v: &Vector2) -> f64 {
    v.norm()
}

/// Returns `v` scaled to unit length.
///
/// A zero-length input yields `(0, 0)`. Callers must read that as an
/// undefined direction, not as a unit vector.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn normalize_vector(v: &Vector2) -> Vector2 {
    let len = vector_length(v);
    // Exact zero only: tiny but nonzero vectors still normalize.
    if len == 0.0 {
        return Vector2::zeros();
    }
    v / len
}

/// Rotates `v` by 90° counter-clockwise.
#[must_use]
pub fn perpendicular_vector(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Orthogonally projects `point` onto the infinite line through
/// `line_point` along `direction`.
///
/// `direction` need not be unit length. A zero direction collapses the
/// projection onto `line_point`.
#[must_use]
pub fn project_point_onto_line(point: &Point2, line_point: &Point2, direction: &Vector2) -> Point2 {
    let unit = normalize_vector(direction);
    let t = create_vector(line_point, point).dot(&unit);
    line_point + unit * t
}

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    nalgebra::distance(p1, p2)
}

/// Returns the direction angle of `p1 → p2` in `(-π, π]`.
#[must_use]
pub fn angle(p1: &Point2, p2: &Point2) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}

/// Returns `true` if `v` is too short to define a direction.
#[must_use]
pub fn is_zero_vector(v: &Vector2) -> bool {
    vector_length(v) < TOLERANCE
}
