pub mod vector_2d;

use crate::error::{OperationError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Numeric zero for vector lengths.
pub const TOLERANCE: f64 = 1e-10;

/// Default distance below which two room points are considered coincident.
pub const POINT_TOLERANCE: f64 = 0.01;

/// Default angle difference (radians) below which two walls share an orientation.
pub const ANGLE_TOLERANCE: f64 = 0.01;

/// Comparison tolerances used by the wall and triangle operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    point: f64,
    angle: f64,
}

impl Tolerances {
    /// Creates a new tolerance set.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if either value is not a
    /// positive finite number.
    pub fn new(point: f64, angle: f64) -> Result<Self> {
        for (name, value) in [("point", point), ("angle", angle)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "{name} tolerance must be positive and finite, got {value}"
                ))
                .into());
            }
        }
        Ok(Self { point, angle })
    }

    /// Returns the coincidence distance for points.
    #[must_use]
    pub fn point(&self) -> f64 {
        self.point
    }

    /// Returns the orientation tolerance in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            point: POINT_TOLERANCE,
            angle: ANGLE_TOLERANCE,
        }
    }
}
