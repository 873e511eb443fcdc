pub mod dimension;
pub mod query;
pub mod triangle;
pub mod walls;
