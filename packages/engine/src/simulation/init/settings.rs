use crate::core::EngineError;
use crate::domain::gravity::{gravity_label as format_label, parse_gravity_input};
use crate::domain::SimSettings;

use super::init::spawn_population;
use super::random::seed_state;
use super::SimulationCore;

pub(super) fn gravity(world: &SimulationCore) -> f64 {
    world.gravity
}

pub(super) fn set_gravity(world: &mut SimulationCore, gravity: f64) {
    world.gravity = gravity;
    if world.settings.verbose {
        console_log!("gravity set to {}", gravity);
    }
}

pub(super) fn set_gravity_from_input(world: &mut SimulationCore, raw: &str) -> Result<f64, EngineError> {
    let gravity = parse_gravity_input(raw)?;
    set_gravity(world, gravity);
    Ok(gravity)
}

pub(super) fn gravity_label(world: &SimulationCore) -> String {
    format_label(world.gravity)
}

pub(super) fn load_settings_json(world: &mut SimulationCore, json: &str) -> Result<(), EngineError> {
    let settings = SimSettings::from_json(json)?;

    world.drag.reset();
    world.rng_state = seed_state(settings.seed);
    world.bodies = spawn_population(&settings, world.bounds, &mut world.rng_state);
    world.gravity = settings.gravity;
    world.settings = settings;
    world.frame = 0;

    console_log!(
        "settings loaded: {} apples, size {}, gravity {}",
        world.bodies.len(),
        world.settings.apple_size,
        world.gravity
    );
    Ok(())
}
