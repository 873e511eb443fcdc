//! Room input data as supplied by a room loader.
//!
//! The JSON shape uses camelCase keys (`wallStarts`, `wallEnds`). Wall
//! records carry ids only: endpoints are always recomputed from corners.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, Result};

/// Reference to a wall by id, stored on the corners it touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallReference {
    pub id: String,
}

impl WallReference {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Id-only wall record from the room file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallStub {
    pub id: String,
}

/// A vertex of the room polygon with back-references to adjoining walls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corner {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub wall_starts: Vec<WallReference>,
    #[serde(default)]
    pub wall_ends: Vec<WallReference>,
}

/// A room as loaded from storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomData {
    #[serde(default)]
    pub walls: Vec<WallStub>,
    pub corners: Vec<Corner>,
}

impl RoomData {
    /// Parses room data from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Json` if the text is not a valid room document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoadError::from(e).into())
    }

    /// Builds a closed room from polygon vertices given in order.
    ///
    /// Corner `i` is named `c{i}`; wall `w{i}` runs from corner `i` to
    /// corner `(i + 1) % n`. Fewer than two points produce no walls.
    #[must_use]
    pub fn from_polygon(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let has_walls = n >= 2;
        let corners = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                let (wall_starts, wall_ends) = if has_walls {
                    (
                        vec![WallReference::new(format!("w{i}"))],
                        vec![WallReference::new(format!("w{}", (i + n - 1) % n))],
                    )
                } else {
                    (Vec::new(), Vec::new())
                };
                Corner {
                    id: format!("c{i}"),
                    x,
                    y,
                    wall_starts,
                    wall_ends,
                }
            })
            .collect();
        let walls = if has_walls {
            (0..n).map(|i| WallStub { id: format!("w{i}") }).collect()
        } else {
            Vec::new()
        };
        Self { walls, corners }
    }

    /// Returns one of the built-in sample rooms.
    #[must_use]
    pub fn preset(kind: RoomType) -> Self {
        match kind {
            RoomType::Simple => {
                Self::from_polygon(&[(0.0, 0.0), (12.0, 0.0), (12.0, 8.0), (0.0, 8.0)])
            }
            RoomType::Triangle => Self::from_polygon(&[(0.0, 0.0), (8.0, 0.0), (0.0, 6.0)]),
            RoomType::TShape => Self::from_polygon(&[
                (0.0, 0.0),
                (12.0, 0.0),
                (12.0, 4.0),
                (8.0, 4.0),
                (8.0, 10.0),
                (4.0, 10.0),
                (4.0, 4.0),
                (0.0, 4.0),
            ]),
        }
    }
}

/// Names of the built-in sample rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    Simple,
    Triangle,
    TShape,
}

impl RoomType {
    /// Every built-in room, in listing order.
    pub const ALL: [RoomType; 3] = [RoomType::Simple, RoomType::Triangle, RoomType::TShape];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::Simple => "simple",
            RoomType::Triangle => "triangle",
            RoomType::TShape => "t_shape",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = LoadError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| LoadError::UnknownRoomType(s.to_owned()))
    }
}
