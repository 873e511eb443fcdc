pub mod corner;
pub mod wall;

pub use corner::{CornerData, CornerId};
pub use wall::Wall;

use std::collections::HashMap;

use crate::error::TopologyError;
use crate::math::Point2;
use crate::room::{Corner, RoomData};
use slotmap::SlotMap;

/// The corners a wall id resolves to.
///
/// Each side holds the first corner, in room order, that lists the id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallEnds {
    /// First corner whose `wall_starts` contains the id.
    pub start: Option<CornerId>,
    /// First corner whose `wall_ends` contains the id.
    pub end: Option<CornerId>,
}

/// Arena owning the corners of one room.
///
/// Corners keep their insertion order. Wall ids are indexed once into a
/// [`WallEnds`] map so wall derivation never rescans the corner list.
#[derive(Debug, Default)]
pub struct RoomStore {
    corners: SlotMap<CornerId, CornerData>,
    order: Vec<CornerId>,
    walls: HashMap<String, WallEnds>,
}

impl RoomStore {
    /// Creates a new, empty room store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from the corners of a loaded room.
    #[must_use]
    pub fn from_room(room: &RoomData) -> Self {
        Self::from_corners(&room.corners)
    }

    /// Builds a store from a corner list, preserving its order.
    #[must_use]
    pub fn from_corners(corners: &[Corner]) -> Self {
        let mut store = Self::new();
        for corner in corners {
            store.add_corner(CornerData::from(corner));
        }
        store
    }

    /// Inserts a corner and indexes its wall references.
    pub fn add_corner(&mut self, data: CornerData) -> CornerId {
        let starts = data.wall_starts.clone();
        let ends = data.wall_ends.clone();
        let id = self.corners.insert(data);
        self.order.push(id);
        for wall in starts {
            self.walls.entry(wall).or_default().start.get_or_insert(id);
        }
        for wall in ends {
            self.walls.entry(wall).or_default().end.get_or_insert(id);
        }
        id
    }

    /// Returns a reference to the corner data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn corner(&self, id: CornerId) -> Result<&CornerData, TopologyError> {
        self.corners
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("corner".into()))
    }

    /// Iterates corners in insertion order.
    pub fn corners(&self) -> impl Iterator<Item = (CornerId, &CornerData)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.corners.get(id).map(|data| (id, data)))
    }

    /// Returns the corner positions in insertion order.
    #[must_use]
    pub fn corner_points(&self) -> Vec<Point2> {
        self.corners().map(|(_, c)| c.point).collect()
    }

    /// Returns the corners a wall id resolves to, if any corner mentions it.
    #[must_use]
    pub fn wall_ends(&self, wall: &str) -> Option<WallEnds> {
        self.walls.get(wall).copied()
    }

    /// Returns the number of corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the store holds no corners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
