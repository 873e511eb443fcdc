use crate::error::{GeometryError, OperationError, Result, TopologyError};
use crate::math::vector_2d::distance;
use crate::math::Tolerances;
use crate::operations::walls::DeriveWalls;
use crate::room::RoomData;
use crate::topology::RoomStore;

/// Strict consistency check for room data.
///
/// The dimension operations tolerate malformed rooms. Run this first when
/// bad input should be rejected instead.
#[derive(Debug, Default)]
pub struct ValidateRoom {
    tolerances: Tolerances,
}

impl ValidateRoom {
    /// Creates a new `ValidateRoom` query with default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the comparison tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Executes the validation.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for rooms with fewer than 3
    /// corners, `TopologyError` for wall references that do not pair up or
    /// wall records no corner mentions, and `GeometryError::Degenerate`
    /// for walls whose endpoints coincide.
    pub fn execute(&self, room: &RoomData) -> Result<()> {
        if room.corners.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "room needs at least 3 corners, got {}",
                room.corners.len()
            ))
            .into());
        }

        let store = RoomStore::from_room(room);
        for (_, corner) in store.corners() {
            for wall in &corner.wall_starts {
                if store.wall_ends(wall).and_then(|e| e.end).is_none() {
                    return Err(TopologyError::DanglingWallStart {
                        wall: wall.clone(),
                        corner: corner.name.clone(),
                    }
                    .into());
                }
            }
            for wall in &corner.wall_ends {
                if store.wall_ends(wall).and_then(|e| e.start).is_none() {
                    return Err(TopologyError::DanglingWallEnd {
                        wall: wall.clone(),
                        corner: corner.name.clone(),
                    }
                    .into());
                }
            }
        }

        if let Some(stub) = room.walls.iter().find(|w| store.wall_ends(&w.id).is_none()) {
            return Err(TopologyError::InvalidTopology(format!(
                "wall {} is not referenced by any corner",
                stub.id
            ))
            .into());
        }

        for wall in DeriveWalls::new().execute(&store) {
            if distance(&wall.start, &wall.end) < self.tolerances.point() {
                return Err(
                    GeometryError::Degenerate(format!("wall {} has zero length", wall.id)).into(),
                );
            }
        }

        Ok(())
    }
}
