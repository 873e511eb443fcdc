use tracing::trace;

use crate::geometry::Segment;
use crate::math::vector_2d::distance;
use crate::math::{Point2, Tolerances};
use crate::topology::RoomStore;

use super::{DimensionResult, RightTriangle};

/// Extends a wall along its own line to the farthest corner projection.
///
/// Every corner not on a wall endpoint is projected onto the wall line and
/// measured from both endpoints. When the larger measurement beats the
/// current width, the endpoint opposite the anchor moves to the projection.
#[derive(Debug, Clone, Copy)]
pub struct CalculateWidth {
    wall: Segment,
    tolerances: Tolerances,
}

impl CalculateWidth {
    /// Creates a new `CalculateWidth` operation for `wall`.
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
    ///
    /// The returned `distance` is the largest single-anchor measurement,
    /// which can be shorter than `|start - end|` once both ends moved.
    #[must_use]
    pub fn execute_points(&self, corners: &[Point2]) -> DimensionResult {
        let wall = self.wall;
        let eps = self.tolerances.point();
        let mut start = wall.start;
        let mut end = wall.end;
        let mut max_width = wall.length();

        let candidates = corners
            .iter()
            .filter(|c| distance(c, &wall.start) >= eps && distance(c, &wall.end) >= eps);

        for &corner in candidates {
            let (Ok(t1), Ok(t2)) = (
                RightTriangle::new(wall.start, corner, wall).execute(),
                RightTriangle::new(wall.end, corner, wall).execute(),
            ) else {
                trace!(?corner, "degenerate wall, corner skipped for width");
                continue;
            };

            let new_width = t1.distance.max(t2.distance);
            if new_width > max_width {
                max_width = new_width;
                if t1.distance > t2.distance {
                    end = t1.third_corner;
                } else {
                    start = t2.third_corner;
                }
            }
        }

        DimensionResult {
            start,
            end,
            distance: max_width,
        }
    }
}
