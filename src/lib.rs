//! Floor-plan dimension engine.
//!
//! Rebuilds directed walls from a room's corner graph, keeps one wall per
//! orientation, and for each of those walls measures a width axis (the wall
//! extended along its own line) and a length axis (the span across it),
//! using right-triangle projections of every corner.
//!
//! ```
//! use roomaxis::operations::dimension::GenerateDimensions;
//! use roomaxis::room::RoomData;
//! use roomaxis::topology::RoomStore;
//!
//! let room = RoomData::from_polygon(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
//! let options = GenerateDimensions::new().execute(&RoomStore::from_room(&room));
//! assert_eq!(options.len(), 2);
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod room;
pub mod topology;

pub use error::{Result, RoomAxisError};
