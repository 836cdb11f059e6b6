//! Input - pointer/touch events and the drag state machine
//!
//! `pointer` turns raw device coordinates into surface-local points and
//! normalizes mouse and touch into one `PointerInput`. `drag` applies those
//! inputs to the apple population.

mod drag;
mod pointer;

pub use drag::{ActiveDrag, DragController, DragTransition};
pub use pointer::{first_touch, to_surface_local, PointerInput};
