use std::f64::consts::PI;

use tracing::debug;

use crate::math::Tolerances;
use crate::topology::{RoomStore, Wall};

use super::DeriveWalls;

/// Derives the walls of a room and keeps one wall per orientation.
#[derive(Debug, Default)]
pub struct UniqueWalls {
    tolerances: Tolerances,
}

impl UniqueWalls {
    /// Creates a new `UniqueWalls` operation with default tolerances.
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

    /// Executes the operation, returning unique walls in derivation order.
    #[must_use]
    pub fn execute(&self, store: &RoomStore) -> Vec<Wall> {
        let walls = DeriveWalls::new().execute(store);
        dedup_by_orientation(walls, self.tolerances.angle())
    }
}

/// Drops walls whose orientation (mod π) was already seen.
///
/// Two walls share an orientation when their angles differ by less than
/// `tolerance`, or differ from π by less than `tolerance`. The first wall
/// of each orientation is kept; output order is input order.
///
/// The seen set is scanned linearly, so this is quadratic in the number of
/// walls. Keep it that way: a sorted or bucketed variant would change which
/// wall survives near bucket edges.
#[must_use]
pub fn dedup_by_orientation(walls: Vec<Wall>, tolerance: f64) -> Vec<Wall> {
    let total = walls.len();
    let mut seen: Vec<f64> = Vec::new();
    let mut unique = Vec::new();

    for wall in walls {
        let wall_angle = wall.angle();
        let duplicate = seen.iter().any(|&s| {
            let diff = (wall_angle - s).abs();
            diff < tolerance || (diff - PI).abs() < tolerance
        });
        if !duplicate {
            seen.push(wall_angle);
            unique.push(wall);
        }
    }

    debug!(walls = total, unique = unique.len(), "deduplicated walls by orientation");
    unique
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::ANGLE_TOLERANCE;
    use crate::room::RoomData;

    fn store(points: &[(f64, f64)]) -> RoomStore {
        RoomStore::from_room(&RoomData::from_polygon(points))
    }

    fn ids(walls: &[Wall]) -> Vec<&str> {
        walls.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn square_reduces_to_two_orientations() {
        let s = store(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let unique = UniqueWalls::new().execute(&s);
        assert_eq!(ids(&unique), ["w0", "w1"]);
    }

    #[test]
    fn triangle_keeps_all_walls() {
        let s = store(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert_eq!(UniqueWalls::new().execute(&s).len(), 3);
    }

    #[test]
    fn t_shape_has_two_orientations() {
        let room = RoomData::preset(crate::room::RoomType::TShape);
        let unique = UniqueWalls::new().execute(&RoomStore::from_room(&room));
        assert_eq!(ids(&unique), ["w0", "w1"]);
    }

    #[test]
    fn idempotent() {
        let s = store(&[
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 2.0),
            (9.0, 5.0),
            (3.0, 5.0),
            (0.0, 3.0),
        ]);
        let once = UniqueWalls::new().execute(&s);
        let twice = dedup_by_orientation(once.clone(), ANGLE_TOLERANCE);
        assert_eq!(once, twice);
    }

    #[test]
    fn near_parallel_within_tolerance_is_dropped() {
        // w2 runs at atan(0.05 / 10) ≈ 0.005 rad from π.
        let s = store(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.05)]);
        let unique = UniqueWalls::new().execute(&s);
        assert_eq!(ids(&unique), ["w0", "w1"]);
    }

    #[test]
    fn tighter_tolerance_keeps_near_parallel() {
        let s = store(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.05)]);
        let unique = UniqueWalls::new()
            .with_tolerances(Tolerances::new(0.01, 0.001).unwrap())
            .execute(&s);
        assert_eq!(ids(&unique), ["w0", "w1", "w2"]);
    }

    #[test]
    fn empty_input() {
        assert!(dedup_by_orientation(Vec::new(), ANGLE_TOLERANCE).is_empty());
        assert!(UniqueWalls::new().execute(&RoomStore::new()).is_empty());
    }
}
