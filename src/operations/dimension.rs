use serde::Serialize;
use tracing::debug;

use crate::geometry::Segment;
use crate::math::Tolerances;
use crate::topology::RoomStore;

use super::triangle::{CalculateLength, CalculateWidth};
use super::walls::UniqueWalls;

/// One candidate measurement frame, anchored to a unique wall.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionOption {
    /// `dim_<wall id>_<index>`.
    pub id: String,
    /// Axis across the room, perpendicular to the wall.
    pub length: Segment,
    /// Wall extended along its own line.
    pub width: Segment,
    pub length_distance: f64,
    pub width_distance: f64,
    /// Human-readable summary with both distances to one decimal.
    pub description: String,
}

/// Builds a length/width option for every unique wall of a room.
///
/// Output order matches unique-wall order. Walls are independent, so
/// callers may split this work per wall if needed.
#[derive(Debug, Default)]
pub struct GenerateDimensions {
    tolerances: Tolerances,
}

impl GenerateDimensions {
    /// Creates a new `GenerateDimensions` operation with default tolerances.
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

    /// Executes the operation.
    #[must_use]
    pub fn execute(&self, store: &RoomStore) -> Vec<DimensionOption> {
        let corners = store.corner_points();
        let walls = UniqueWalls::new()
            .with_tolerances(self.tolerances)
            .execute(store);

        let options: Vec<_> = walls
            .iter()
            .enumerate()
            .map(|(index, wall)| {
                let segment = wall.segment();
                let width = CalculateWidth::new(segment)
                    .with_tolerances(self.tolerances)
                    .execute_points(&corners);
                let length = CalculateLength::new(segment)
                    .with_tolerances(self.tolerances)
                    .execute_points(&corners);
                debug!(
                    wall = %wall.id,
                    length = length.distance,
                    width = width.distance,
                    "dimension option"
                );
                DimensionOption {
                    id: format!("dim_{}_{index}", wall.id),
                    length: length.segment(),
                    width: width.segment(),
                    length_distance: length.distance,
                    width_distance: width.distance,
                    description: format!(
                        "Length: {} units, Width: {} units",
                        format_distance(length.distance),
                        format_distance(width.distance)
                    ),
                }
            })
            .collect();

        debug!(options = options.len(), "generated dimension options");
        options
    }
}

/// Formats a distance to one decimal, rounding exact halves away from zero.
///
/// `{:.1}` alone rounds an exact half such as `2.25` to even (`2.2`).
#[allow(clippy::float_cmp)]
fn format_distance(d: f64) -> String {
    let scaled = d * 10.0;
    // `scaled` is a true half only when the multiplication was exact.
    let exact = d.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        return format!("{:.1}", scaled.round() / 10.0);
    }
    format!("{d:.1}")
}
