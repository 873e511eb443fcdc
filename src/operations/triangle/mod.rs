//! Right-triangle projection and the width/length axes built from it.

mod length;
mod width;

pub use length::CalculateLength;
pub use width::CalculateWidth;

use crate::error::Result;
use crate::geometry::Segment;
use crate::math::vector_2d::{distance, project_point_onto_line};
use crate::math::Point2;

/// The third vertex of a right triangle and its distance from the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleResult {
    /// Foot of the perpendicular, where the right angle sits.
    pub third_corner: Point2,
    /// Distance from the anchor vertex to `third_corner`.
    pub distance: f64,
}

/// A measured axis segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionResult {
    pub start: Point2,
    pub end: Point2,
    pub distance: f64,
}

impl DimensionResult {
    /// Returns the axis as a segment.
    #[must_use]
    pub fn segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }
}

/// Builds the right triangle `A-C-X` whose right angle `X` lies on a line.
///
/// `X` is the orthogonal projection of `C` onto the infinite line through
/// `target.start` along `target.end - target.start`.
#[derive(Debug, Clone, Copy)]
pub struct RightTriangle {
    vertex_a: Point2,
    vertex_c: Point2,
    target: Segment,
}

impl RightTriangle {
    /// Creates a new `RightTriangle` construction.
    #[must_use]
    pub fn new(vertex_a: Point2, vertex_c: Point2, target: Segment) -> Self {
        Self {
            vertex_a,
            vertex_c,
            target,
        }
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the target line has no
    /// direction.
    pub fn execute(&self) -> Result<TriangleResult> {
        let direction = self.target.direction()?;
        let third_corner = project_point_onto_line(&self.vertex_c, &self.target.start, &direction);
        Ok(TriangleResult {
            third_corner,
            distance: distance(&self.vertex_a, &third_corner),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::math::vector_2d::{create_vector, normalize_vector};
    use crate::math::Vector2;

    const TOL: f64 = 1e-9;

    #[test]
    fn projects_onto_x_axis() {
        let line = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let t = RightTriangle::new(Point2::origin(), Point2::new(7.0, 4.0), line)
            .execute()
            .unwrap();
        assert!((t.third_corner.x - 7.0).abs() < TOL);
        assert!(t.third_corner.y.abs() < TOL);
        assert!((t.distance - 7.0).abs() < TOL);
    }

    #[test]
    fn distance_measured_from_anchor() {
        let line = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        let t = RightTriangle::new(Point2::new(10.0, 0.0), Point2::new(3.0, 2.0), line)
            .execute()
            .unwrap();
        assert!((t.distance - 7.0).abs() < TOL);
    }

    #[test]
    fn right_angle_at_third_corner() {
        let line = Segment::from_coords(1.0, 1.0, 4.0, 3.0);
        let c = Point2::new(-2.0, 6.0);
        let t = RightTriangle::new(line.start, c, line).execute().unwrap();
        let xc = create_vector(&t.third_corner, &c);
        let dir = normalize_vector(&line.vector());
        assert!(xc.dot(&dir).abs() < TOL);
    }

    #[test]
    fn third_corner_lies_on_target_line() {
        let lines = [
            Segment::from_coords(0.0, 0.0, 1.0, 0.0),
            Segment::from_coords(2.0, -1.0, -3.0, 4.0),
            Segment::from_coords(5.0, 5.0, 5.0, 9.0),
            Segment::from_coords(-1.0, 2.0, 0.3, 2.1),
        ];
        let points = [
            Point2::new(3.0, 7.0),
            Point2::new(-4.0, -2.0),
            Point2::new(0.0, 0.0),
            Point2::new(12.5, -3.25),
        ];
        for line in lines {
            for c in points {
                let t = RightTriangle::new(line.end, c, line).execute().unwrap();
                let offset = create_vector(&line.start, &t.third_corner);
                let dir: Vector2 = normalize_vector(&line.vector());
                assert!((offset.x * dir.y - offset.y * dir.x).abs() < TOL, "line={line:?} c={c:?}");
            }
        }
    }

    #[test]
    fn degenerate_target_is_error() {
        let line = Segment::from_coords(2.0, 2.0, 2.0, 2.0);
        let result = RightTriangle::new(Point2::origin(), Point2::new(1.0, 1.0), line).execute();
        assert!(matches!(
            result,
            Err(crate::error::RoomAxisError::Geometry(GeometryError::ZeroVector))
        ));
    }
}
