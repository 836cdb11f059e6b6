use super::SimulationCore;

/// f64s per apple in the render buffer: `x, y, size`
pub const RENDER_STRIDE: usize = 3;

/// Pack apple positions into the flat buffer JS reads from wasm memory.
pub(super) fn extract_render_buffer(world: &mut SimulationCore) -> usize {
    world.render_buffer.clear();
    world.render_buffer.reserve(world.bodies.len() * RENDER_STRIDE);

    for body in world.bodies.iter() {
        world.render_buffer.push(body.pos.x);
        world.render_buffer.push(body.pos.y);
        world.render_buffer.push(body.size);
    }

    world.render_buffer.len()
}
