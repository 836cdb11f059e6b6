//! Body - a single apple
//!
//! Position is the top-left corner of the sprite's bounding square; `size` is
//! both the square's side and the circle diameter used for collisions.

mod body;

pub use body::Body;
