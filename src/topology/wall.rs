use crate::geometry::Segment;
use crate::math::vector_2d::angle;
use crate::math::Point2;

use super::corner::CornerId;

/// A directed wall segment reconstructed from the corner graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    /// Wall id from the room file.
    pub id: String,
    /// Corner the wall starts at.
    pub start_corner: CornerId,
    /// Corner the wall ends at.
    pub end_corner: CornerId,
    /// Position of the start corner.
    pub start: Point2,
    /// Position of the end corner.
    pub end: Point2,
}

impl Wall {
    /// Returns the wall as an oriented segment.
    #[must_use]
    pub fn segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }

    /// Returns the direction angle of the wall in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        angle(&self.start, &self.end)
    }

    /// Returns the wall length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segment().length()
    }
}
