use crate::core::{Bounds, DrawSurface, Vec2};

/// Apple - a falling, bouncing, draggable sprite
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Top-left corner of the bounding square (surface pixels)
    pub pos: Vec2,
    /// Velocity (pixels per tick)
    pub velocity: Vec2,
    /// Side of the bounding square / collision diameter
    pub size: f64,
    /// Held by the pointer. Integration skips the body while set.
    pub dragging: bool,
}

impl Body {
    pub fn new(x: f64, y: f64, size: f64, dx: f64, dy: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::new(dx, dy),
            size,
            dragging: false,
        }
    }

    /// Advance one tick: gravity, move, then floor and wall bounces.
    ///
    /// A dragged body is left exactly as it is. Walls only flip `dx`; the body
    /// is not pushed back inside, so it can overshoot an edge by up to one
    /// tick of travel. There is no ceiling.
    pub fn integrate(&mut self, gravity: f64, bounds: Bounds, damping: f64) {
        if self.dragging {
            return;
        }

        self.velocity.y += gravity;
        self.pos += self.velocity;

        // Floor: clamp and bounce with energy loss
        if self.pos.y + self.size > bounds.height {
            self.pos.y = bounds.height - self.size;
            self.velocity.y = -self.velocity.y * damping;
        }

        // Walls: elastic reflection, no clamp
        if self.pos.x + self.size > bounds.width || self.pos.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
    }

    /// Strict bounding-box hit test; points on the edge miss.
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + self.size
            && point.y > self.pos.y
            && point.y < self.pos.y + self.size
    }

    /// Draw the sprite scaled to `size`×`size` at the body's position.
    pub fn render<S: DrawSurface>(&self, surface: &mut S, sprite: &S::Image) {
        surface.draw_image(sprite, self.pos.x, self.pos.y, self.size, self.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const FAR: Bounds = Bounds::new(10_000.0, 1_000.0);

    #[test]
    fn free_flight_adds_gravity_then_moves() {
        let mut body = Body::new(100.0, 100.0, 50.0, 2.0, -1.0);
        body.integrate(0.7, FAR, 0.8);

        assert_abs_diff_eq!(body.velocity.y, -0.3, epsilon = 1e-12);
        assert_eq!(body.velocity.x, 2.0);
        assert_eq!(body.pos.x, 102.0);
        assert_abs_diff_eq!(body.pos.y, 99.7, epsilon = 1e-12);
    }

    #[test]
    fn resting_body_falls_one_tick() {
        let mut body = Body::new(100.0, 100.0, 50.0, 0.0, 0.0);
        body.integrate(0.7, FAR, 0.8);

        assert_abs_diff_eq!(body.velocity.y, 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(body.pos.y, 100.7, epsilon = 1e-12);
        assert_eq!(body.pos.x, 100.0);
    }

    #[test]
    fn floor_clamps_and_damps() {
        // Bottom edge at 955 + 50 = 1005 after the move.
        let mut body = Body::new(10.0, 945.0, 50.0, 0.0, 10.0);
        body.integrate(0.0, FAR, 0.8);

        assert_eq!(body.pos.y, 950.0);
        assert_abs_diff_eq!(body.velocity.y, -8.0, epsilon = 1e-12);
    }

    #[test]
    fn floor_touch_without_crossing_does_not_bounce() {
        let mut body = Body::new(10.0, 945.0, 50.0, 0.0, 5.0);
        body.integrate(0.0, FAR, 0.8);
        // y + size == height exactly: not "exceeds"
        assert_eq!(body.pos.y, 950.0);
        assert_eq!(body.velocity.y, 5.0);
    }

    #[test]
    fn right_wall_flips_dx_without_clamping() {
        let bounds = Bounds::new(200.0, 1_000.0);
        let mut body = Body::new(148.0, 100.0, 50.0, 3.0, 0.0);
        body.integrate(0.0, bounds, 0.8);

        assert_eq!(body.pos.x, 151.0);
        assert_eq!(body.velocity.x, -3.0);
    }

    #[test]
    fn left_wall_flips_dx() {
        let mut body = Body::new(1.0, 100.0, 50.0, -2.5, 0.0);
        body.integrate(0.0, FAR, 0.8);

        assert_eq!(body.pos.x, -1.5);
        assert_eq!(body.velocity.x, 2.5);
    }

    #[test]
    fn no_ceiling() {
        let mut body = Body::new(10.0, 5.0, 50.0, 0.0, -40.0);
        body.integrate(0.7, FAR, 0.8);
        assert!(body.pos.y < 0.0);
        assert!(body.velocity.y < 0.0);
    }

    #[test]
    fn dragging_body_is_untouched() {
        let mut body = Body::new(10.0, 990.0, 50.0, -5.0, 3.0);
        body.dragging = true;
        let before = body.clone();

        for gravity in [0.1, 0.7, 2.0, 100.0] {
            body.integrate(gravity, FAR, 0.8);
        }
        assert_eq!(body, before);
    }

    #[test]
    fn contains_point_is_strict() {
        let body = Body::new(10.0, 20.0, 50.0, 0.0, 0.0);

        assert!(body.contains_point(Vec2::new(35.0, 45.0)));
        assert!(body.contains_point(Vec2::new(10.001, 69.999)));

        assert!(!body.contains_point(Vec2::new(10.0, 45.0)));
        assert!(!body.contains_point(Vec2::new(60.0, 45.0)));
        assert!(!body.contains_point(Vec2::new(35.0, 20.0)));
        assert!(!body.contains_point(Vec2::new(35.0, 70.0)));
        assert!(!body.contains_point(Vec2::new(0.0, 0.0)));
    }
}
