use crate::core::DrawSurface;
use crate::systems::body::Body;
use crate::systems::collision::resolve_collisions;

use super::{PerfTimer, SimulationCore};

/// One tick. `on_integrated` sees each apple right after its own integration,
/// before collisions run; that is where drawing happens.
pub(super) fn step<F>(world: &mut SimulationCore, mut on_integrated: F)
where
    F: FnMut(&Body),
{
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = perf_on.then(PerfTimer::start);
    let mut phase = step_start;

    let gravity = world.gravity;
    let bounds = world.bounds;
    let damping = world.damping();

    // === INTEGRATION (+ draw) ===
    for body in world.bodies.iter_mut() {
        body.integrate(gravity, bounds, damping);
        on_integrated(&*body);
    }
    if let Some(timer) = phase.as_mut() {
        world.perf_stats.integrate_ms = timer.lap_ms();
    }

    // === COLLISIONS ===
    let params = world.collision_params();
    let report = resolve_collisions(&mut world.bodies, params);
    if let Some(timer) = phase.as_mut() {
        world.perf_stats.collision_ms = timer.lap_ms();
    }

    if perf_on {
        world.perf_stats.pair_checks = report.pair_checks;
        world.perf_stats.collisions_resolved = report.resolved;
        world.perf_stats.body_count = world.bodies.len() as u32;
        world.perf_stats.bodies_dragging = world.bodies.iter().filter(|b| b.dragging).count() as u32;
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
}

pub(super) fn render_frame<S: DrawSurface>(
    world: &mut SimulationCore,
    surface: &mut S,
    background: &S::Image,
    sprite: &S::Image,
) {
    surface.clear();
    let full = surface.bounds();
    surface.draw_image(background, 0.0, 0.0, full.width, full.height);

    step(world, |body| body.render(surface, sprite));
}
