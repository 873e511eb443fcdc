mod dedup;
mod derive;

pub use dedup::{dedup_by_orientation, UniqueWalls};
pub use derive::DeriveWalls;
