use crate::core::Vec2;
use crate::systems::body::Body;

use super::pointer::PointerInput;

/// The apple currently held and where it was grabbed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveDrag {
    /// Index into the population
    pub index: usize,
    /// Pointer position minus apple position at grab time
    pub grab_offset: Vec2,
}

/// What a pointer input did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTransition {
    /// Idle -> Dragging
    Grabbed(usize),
    /// Dragging -> Dragging, apple repositioned
    Moved(usize),
    /// Dragging -> Idle
    Released(usize),
    /// No state change (miss on down, move/up while idle)
    Ignored,
}

/// Drag state machine: Idle -> Dragging -> Idle.
///
/// Holds at most one apple. While held, the apple's `dragging` flag is set and
/// its position follows the pointer; its velocity is left as it was before the
/// grab, so a released apple resumes its old motion rather than being thrown.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    active: Option<ActiveDrag>,
}

impl DragController {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<ActiveDrag> {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn handle(&mut self, bodies: &mut [Body], input: PointerInput) -> DragTransition {
        match input {
            PointerInput::Down(point) => self.begin(bodies, point),
            PointerInput::Move(point) => self.update(bodies, point),
            PointerInput::Up => self.end(bodies),
        }
    }

    /// Grab the first apple (population order) under `point`.
    ///
    /// A down while something is already held releases it first, so the
    /// single-drag invariant survives a second finger landing mid-drag.
    pub fn begin(&mut self, bodies: &mut [Body], point: Vec2) -> DragTransition {
        if self.active.is_some() {
            self.end(bodies);
        }

        let Some(index) = bodies.iter().position(|b| b.contains_point(point)) else {
            return DragTransition::Ignored;
        };

        let body = &mut bodies[index];
        body.dragging = true;
        self.active = Some(ActiveDrag {
            index,
            grab_offset: point - body.pos,
        });
        DragTransition::Grabbed(index)
    }

    /// Move the held apple so the grab point stays under the pointer.
    pub fn update(&mut self, bodies: &mut [Body], point: Vec2) -> DragTransition {
        let Some(drag) = self.active else {
            return DragTransition::Ignored;
        };
        let Some(body) = bodies.get_mut(drag.index) else {
            // Population replaced under us (settings reload); forget the drag.
            self.active = None;
            return DragTransition::Ignored;
        };

        body.pos = point - drag.grab_offset;
        DragTransition::Moved(drag.index)
    }

    /// Let go of the held apple, if any.
    pub fn end(&mut self, bodies: &mut [Body]) -> DragTransition {
        let Some(drag) = self.active.take() else {
            return DragTransition::Ignored;
        };
        if let Some(body) = bodies.get_mut(drag.index) {
            body.dragging = false;
        }
        DragTransition::Released(drag.index)
    }

    /// Drop any drag without touching bodies (used when the population is rebuilt).
    pub fn reset(&mut self) {
        self.active = None;
    }
}
