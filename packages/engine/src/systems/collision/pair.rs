use crate::core::Vec2;
use crate::domain::settings::{DEFAULT_COLLISION_RESTITUTION, DEFAULT_SEPARATION_SHARE};
use crate::systems::body::Body;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionParams {
    /// Scale applied to each exchanged velocity
    pub restitution: f64,
    /// Fraction of the overlap each apple is pushed
    pub separation_share: f64,
}

impl Default for CollisionParams {
    fn default() -> Self {
        Self {
            restitution: DEFAULT_COLLISION_RESTITUTION,
            separation_share: DEFAULT_SEPARATION_SHARE,
        }
    }
}

/// Push `a` and `b` apart and swap their velocities if they overlap.
///
/// The overlap threshold is `a.size` alone, not the sum of both radii. With
/// equal sizes the two agree; with mixed sizes the result depends on pair
/// order. Coincident apples (`distance == 0`) get `atan2(0, 0) = 0` and are
/// separated horizontally, `a` to the left.
///
/// Returns `true` when the pair overlapped.
pub fn resolve_pair(a: &mut Body, b: &mut Body, params: CollisionParams) -> bool {
    let delta = b.pos - a.pos;
    let distance = delta.length();

    if distance >= a.size {
        return false;
    }

    let overlap = (a.size - distance) / 2.0;
    let shift = Vec2::from_angle(delta.angle()) * (overlap * params.separation_share);

    a.pos -= shift;
    b.pos += shift;

    let (va, vb) = (a.velocity, b.velocity);
    a.velocity = vb * params.restitution;
    b.velocity = va * params.restitution;

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn separated_pair_is_untouched() {
        let mut a = Body::new(0.0, 0.0, 50.0, 1.0, 2.0);
        let mut b = Body::new(50.0, 0.0, 50.0, 3.0, 4.0);
        let (a0, b0) = (a.clone(), b.clone());

        // distance == size is not an overlap
        assert!(!resolve_pair(&mut a, &mut b, CollisionParams::default()));
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn diagonal_overlap_keeps_the_contact_angle() {
        let mut a = Body::new(100.0, 100.0, 50.0, 0.0, 0.0);
        let mut b = Body::new(118.0, 124.0, 50.0, 0.0, 0.0);
        let before = b.pos - a.pos;
        let d0 = before.length(); // 30

        assert!(resolve_pair(&mut a, &mut b, CollisionParams::default()));

        let after = b.pos - a.pos;
        assert_abs_diff_eq!(after.angle(), before.angle(), epsilon = 1e-12);
        // Total push is `overlap` = (size - d) / 2
        let expected = d0 + (50.0 - d0) / 2.0;
        assert_abs_diff_eq!(after.length(), expected, epsilon = 1e-9);
        // Both moved the same distance
        assert_abs_diff_eq!((a.pos - Vec2::new(100.0, 100.0)).length(), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn velocities_swap_and_scale_on_both_axes() {
        let mut a = Body::new(0.0, 0.0, 50.0, 2.0, -3.0);
        let mut b = Body::new(10.0, 10.0, 50.0, -4.0, 5.0);

        assert!(resolve_pair(&mut a, &mut b, CollisionParams::default()));
        assert_abs_diff_eq!(a.velocity.x, -2.8, epsilon = 1e-12);
        assert_abs_diff_eq!(a.velocity.y, 3.5, epsilon = 1e-12);
        assert_abs_diff_eq!(b.velocity.x, 1.4, epsilon = 1e-12);
        assert_abs_diff_eq!(b.velocity.y, -2.1, epsilon = 1e-12);
    }

    #[test]
    fn coincident_apples_split_horizontally() {
        let mut a = Body::new(200.0, 300.0, 40.0, 1.0, 1.0);
        let mut b = Body::new(200.0, 300.0, 40.0, -1.0, 2.0);

        assert!(resolve_pair(&mut a, &mut b, CollisionParams::default()));
        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert!(a.velocity.is_finite() && b.velocity.is_finite());

        // overlap = 20, shift = 10 along +x
        assert_eq!(a.pos, Vec2::new(190.0, 300.0));
        assert_eq!(b.pos, Vec2::new(210.0, 300.0));
    }

    #[test]
    fn threshold_uses_first_apple_size_only() {
        // d = 40: small `a` (30) misses, big `a` (50) hits.
        let mut small = Body::new(0.0, 0.0, 30.0, 0.0, 0.0);
        let mut big = Body::new(40.0, 0.0, 50.0, 0.0, 0.0);
        assert!(!resolve_pair(&mut small, &mut big, CollisionParams::default()));
        assert!(resolve_pair(&mut big, &mut small, CollisionParams::default()));
    }
}
