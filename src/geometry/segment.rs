use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{GeometryError, Result};
use crate::math::vector_2d::{create_vector, distance, is_zero_vector, normalize_vector};
use crate::math::{Point2, Vector2};

/// An oriented line segment from `start` to `end`.
///
/// Used both as a finite segment and as the infinite line through `start`
/// with direction `end - start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    #[serde(serialize_with = "serialize_point")]
    pub start: Point2,
    #[serde(serialize_with = "serialize_point")]
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Creates a segment from raw coordinates.
    #[must_use]
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    /// Returns the (non-normalized) direction `end - start`.
    #[must_use]
    pub fn vector(&self) -> Vector2 {
        create_vector(&self.start, &self.end)
    }

    /// Returns the unit direction of the segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the endpoints coincide.
    pub fn direction(&self) -> Result<Vector2> {
        let v = self.vector();
        if is_zero_vector(&v) {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(normalize_vector(&v))
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.start, &self.end)
    }
}

/// Serializes a point as `{ "x": .., "y": .. }`.
fn serialize_point<S: Serializer>(
    p: &Point2,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("Point", 2)?;
    state.serialize_field("x", &p.x)?;
    state.serialize_field("y", &p.y)?;
    state.end()
}
