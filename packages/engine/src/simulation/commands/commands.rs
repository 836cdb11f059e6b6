use crate::core::{Bounds, Vec2};
use crate::systems::input::{first_touch, DragTransition, PointerInput};

use super::SimulationCore;

pub(super) fn resize(world: &mut SimulationCore, width: f64, height: f64) {
    world.bounds = Bounds::new(width, height);
}

fn apply(world: &mut SimulationCore, input: PointerInput) -> DragTransition {
    let transition = world.drag.handle(&mut world.bodies, input);

    if world.settings.verbose {
        match transition {
            DragTransition::Grabbed(index) => console_log!("grabbed apple {}", index),
            DragTransition::Released(index) => console_log!("released apple {}", index),
            DragTransition::Moved(_) | DragTransition::Ignored => {}
        }
    }

    transition
}

pub(super) fn pointer_down(world: &mut SimulationCore, x: f64, y: f64) -> DragTransition {
    apply(world, PointerInput::Down(Vec2::new(x, y)))
}

pub(super) fn pointer_move(world: &mut SimulationCore, x: f64, y: f64) -> DragTransition {
    apply(world, PointerInput::Move(Vec2::new(x, y)))
}

pub(super) fn pointer_up(world: &mut SimulationCore) -> DragTransition {
    apply(world, PointerInput::Up)
}

pub(super) fn touch_start(world: &mut SimulationCore, points: &[Vec2]) -> DragTransition {
    match first_touch(points) {
        Some(point) => apply(world, PointerInput::Down(point)),
        None => DragTransition::Ignored,
    }
}

pub(super) fn touch_move(world: &mut SimulationCore, points: &[Vec2]) -> DragTransition {
    match first_touch(points) {
        Some(point) => apply(world, PointerInput::Move(point)),
        None => DragTransition::Ignored,
    }
}

pub(super) fn touch_end(world: &mut SimulationCore) -> DragTransition {
    apply(world, PointerInput::Up)
}
