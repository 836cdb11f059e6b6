//! Core - math primitives, drawing seam, logging and errors
//!
//! Nothing in here knows about apples. Everything above builds on it.

#[macro_use]
pub mod utils;
pub mod error;
pub mod math;
pub mod surface;

pub use error::EngineError;
pub use math::{Bounds, Vec2};
pub use surface::DrawSurface;
