use thiserror::Error;

/// Top-level error type for the room dimension engine.
#[derive(Debug, Error)]
pub enum RoomAxisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the corner/wall graph of a room.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wall {wall} starts at corner {corner} but no corner ends it")]
    DanglingWallStart { wall: String, corner: String },

    #[error("wall {wall} ends at corner {corner} but no corner starts it")]
    DanglingWallEnd { wall: String, corner: String },

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while loading room data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed room json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown room type: {0}")]
    UnknownRoomType(String),
}

/// Convenience type alias for results using [`RoomAxisError`].
pub type Result<T> = std::result::Result<T, RoomAxisError>;
