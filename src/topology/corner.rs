use crate::math::Point2;
use crate::room::Corner;

slotmap::new_key_type! {
    /// Unique identifier for a corner in the room store.
    pub struct CornerId;
}

/// Data associated with a room corner.
#[derive(Debug, Clone)]
pub struct CornerData {
    /// Id from the room file.
    pub name: String,
    /// Position of the corner.
    pub point: Point2,
    /// Ids of walls that start at this corner, in file order.
    pub wall_starts: Vec<String>,
    /// Ids of walls that end at this corner, in file order.
    pub wall_ends: Vec<String>,
}

impl CornerData {
    /// Creates a corner with no wall references.
    #[must_use]
    pub fn new(name: impl Into<String>, point: Point2) -> Self {
        Self {
            name: name.into(),
            point,
            wall_starts: Vec::new(),
            wall_ends: Vec::new(),
        }
    }
}

impl From<&Corner> for CornerData {
    fn from(corner: &Corner) -> Self {
        Self {
            name: corner.id.clone(),
            point: Point2::new(corner.x, corner.y),
            wall_starts: corner.wall_starts.iter().map(|r| r.id.clone()).collect(),
            wall_ends: corner.wall_ends.iter().map(|r| r.id.clone()).collect(),
        }
    }
}
