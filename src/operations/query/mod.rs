mod validate;

pub use validate::ValidateRoom;
