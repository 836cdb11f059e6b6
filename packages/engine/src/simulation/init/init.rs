use crate::core::Bounds;
use crate::domain::SimSettings;
use crate::systems::body::Body;
use crate::systems::input::DragController;

use super::perf_stats::PerfStats;
use super::random::{next_unit, seed_state};
use super::{SimulationCore, RENDER_STRIDE};

pub(super) fn create_simulation_core(width: f64, height: f64, settings: SimSettings) -> SimulationCore {
    let bounds = Bounds::new(width, height);
    let mut rng_state = seed_state(settings.seed);
    let bodies = spawn_population(&settings, bounds, &mut rng_state);

    console_log!(
        "🍎 spawned {} apples on {}x{} (gravity {})",
        bodies.len(),
        width,
        height,
        settings.gravity
    );

    build(bounds, settings, bodies, rng_state)
}

pub(super) fn create_from_bodies(bounds: Bounds, settings: SimSettings, bodies: Vec<Body>) -> SimulationCore {
    let rng_state = seed_state(settings.seed);
    build(bounds, settings, bodies, rng_state)
}

fn build(bounds: Bounds, settings: SimSettings, bodies: Vec<Body>, rng_state: u32) -> SimulationCore {
    let render_capacity = bodies.len() * RENDER_STRIDE;
    SimulationCore {
        gravity: settings.gravity,
        settings,
        bodies,
        bounds,
        drag: DragController::new(),
        frame: 0,
        rng_state,
        render_buffer: Vec::with_capacity(render_capacity),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Fresh apples scattered over the upper half of the surface, thrown upwards
/// with a small random sideways speed.
pub(super) fn spawn_population(settings: &SimSettings, bounds: Bounds, rng_state: &mut u32) -> Vec<Body> {
    let size = settings.apple_size;
    (0..settings.apple_count)
        .map(|_| {
            let x = next_unit(rng_state) * (bounds.width - size);
            let y = next_unit(rng_state) * (bounds.height / 2.0);
            let dx = (next_unit(rng_state) - 0.5) * settings.max_initial_speed_x;
            let dy = next_unit(rng_state) * -settings.max_initial_lift;
            Body::new(x, y, size, dx, dy)
        })
        .collect()
}
