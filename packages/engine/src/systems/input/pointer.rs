use crate::core::Vec2;

/// Pointer input after mapping into surface coordinates.
///
/// Mouse and touch both reduce to this; touch only ever reports its first
/// active point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down(Vec2),
    Move(Vec2),
    Up,
}

/// Map a device (client) coordinate into surface-local pixels by removing the
/// surface's on-screen offset.
#[inline]
pub fn to_surface_local(client_x: f64, client_y: f64, offset_left: f64, offset_top: f64) -> Vec2 {
    Vec2::new(client_x - offset_left, client_y - offset_top)
}

/// The one touch point we track. Later fingers are ignored.
pub fn first_touch(points: &[Vec2]) -> Option<Vec2> {
    points.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_coords_are_offset_by_surface_rect() {
        assert_eq!(to_surface_local(150.0, 90.0, 20.0, 40.0), Vec2::new(130.0, 50.0));
        assert_eq!(to_surface_local(5.0, 5.0, 20.0, 40.0), Vec2::new(-15.0, -35.0));
    }

    #[test]
    fn only_the_first_touch_counts() {
        let points = [Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)];
        assert_eq!(first_touch(&points), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(first_touch(&[]), None);
    }
}
