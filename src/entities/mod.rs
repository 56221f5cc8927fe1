mod location;
mod place;
mod user;

pub use location::{Coordinates, Position};
pub use place::{CoordinateValue, Marker, Place};
pub use user::User;
