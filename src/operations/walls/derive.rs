use tracing::{debug, trace};

use crate::topology::{RoomStore, Wall};

/// Reconstructs directed walls from the corner graph.
///
/// For every corner, in order, each `wall_starts` id is resolved to the
/// corner whose `wall_ends` lists the same id. Ids with no such corner are
/// skipped. Output order follows corner order, then `wall_starts` order.
#[derive(Debug, Default)]
pub struct DeriveWalls;

impl DeriveWalls {
    /// Creates a new `DeriveWalls` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the derivation.
    #[must_use]
    pub fn execute(&self, store: &RoomStore) -> Vec<Wall> {
        let mut walls = Vec::new();
        for (start_id, start) in store.corners() {
            for wall_id in &start.wall_starts {
                let Some(end_id) = store.wall_ends(wall_id).and_then(|ends| ends.end) else {
                    trace!(
                        wall = %wall_id,
                        corner = %start.name,
                        "skipping dangling wall reference"
                    );
                    continue;
                };
                let Ok(end) = store.corner(end_id) else {
                    continue;
                };
                walls.push(Wall {
                    id: wall_id.clone(),
                    start_corner: start_id,
                    end_corner: end_id,
                    start: start.point,
                    end: end.point,
                });
            }
        }
        debug!(corners = store.len(), walls = walls.len(), "derived walls");
        walls
    }
}
