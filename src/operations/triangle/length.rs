use tracing::trace;

use crate::geometry::Segment;
use crate::math::vector_2d::{create_vector, distance, normalize_vector, perpendicular_vector};
use crate::math::{Point2, Tolerances};
use crate::topology::RoomStore;

use super::{DimensionResult, RightTriangle};

/// Spans the room across a wall, along the wall's left normal.
///
/// Corners are projected onto the perpendicular through `wall.start` and
/// ranked by signed offset. `wall.start` is the implicit zero, so the axis
/// always contains it even when every corner lies on one side.
#[derive(Debug, Clone, Copy)]
pub struct CalculateLength {
    wall: Segment,
    tolerances: Tolerances,
}

impl CalculateLength {
    /// Creates a new `CalculateLength` operation for `wall`.
    #[must_use]
    pub fn new(wall: Segment) -> Self {
        Self {
            wall,
            tolerances: Tolerances::default(),
        }
    }

    /// Overrides the comparison tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the operation against the corners of a room.
    #[must_use]
    pub fn execute(&self, store: &RoomStore) -> DimensionResult {
        self.execute_points(&store.corner_points())
    }

    /// Executes the operation against raw corner positions.
    #[must_use]
    pub fn execute_points(&self, corners: &[Point2]) -> DimensionResult {
        let origin = self.wall.start;
        let perp = perpendicular_vector(&self.wall.vector());
        let perp_line = Segment::new(origin, origin + perp);
        let unit = normalize_vector(&perp);
        let eps = self.tolerances.point();

        let mut min_offset = 0.0;
        let mut max_offset = 0.0;
        let mut min_corner = origin;
        let mut max_corner = origin;

        for &corner in corners.iter().filter(|c| distance(c, &origin) >= eps) {
            let Ok(triangle) = RightTriangle::new(origin, corner, perp_line).execute() else {
                trace!(?corner, "degenerate wall, corner skipped for length");
                continue;
            };
            let offset = create_vector(&origin, &triangle.third_corner).dot(&unit);
            if offset < min_offset {
                min_offset = offset;
                min_corner = triangle.third_corner;
            }
            if offset > max_offset {
                max_offset = offset;
                max_corner = triangle.third_corner;
            }
        }

        DimensionResult {
            start: min_corner,
            end: max_corner,
            distance: distance(&min_corner, &max_corner),
        }
    }
}
