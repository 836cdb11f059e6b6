//! Collision - pairwise apple overlap resolution
//!
//! One O(n²) pass per frame with no spatial partitioning. Overlapping apples
//! are pushed apart along the line between their corners and swap (damped)
//! velocities. Momentum is not conserved.

mod pair;

pub use pair::{resolve_pair, CollisionParams};

use crate::systems::body::Body;

/// Counters from one resolution pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Pairs where neither apple was being dragged
    pub pair_checks: u32,
    /// Pairs that overlapped and were pushed apart
    pub resolved: u32,
}

/// Resolve every unordered pair `(i, j)`, `i < j`, in population order.
///
/// Pairs involving a dragged apple are skipped. Corrections are applied in
/// place as the pass goes, so a later pair sees positions and velocities
/// already changed by an earlier one.
pub fn resolve_collisions(bodies: &mut [Body], params: CollisionParams) -> CollisionReport {
    let mut report = CollisionReport::default();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if a.dragging || b.dragging {
                continue;
            }

            report.pair_checks += 1;
            if resolve_pair(a, b, params) {
                report.resolved += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pass_counts_and_skips_dragged_pairs() {
        let mut bodies = vec![
            Body::new(0.0, 0.0, 50.0, 0.0, 0.0),
            Body::new(10.0, 0.0, 50.0, 0.0, 0.0),
            Body::new(500.0, 500.0, 50.0, 0.0, 0.0),
        ];
        bodies[1].dragging = true;

        let report = resolve_collisions(&mut bodies, CollisionParams::default());
        // (0,1) and (1,2) skipped, only (0,2) checked and it is far apart.
        assert_eq!(report, CollisionReport { pair_checks: 1, resolved: 0 });
        assert_eq!(bodies[0].pos, crate::core::Vec2::new(0.0, 0.0));
        assert_eq!(bodies[1].pos, crate::core::Vec2::new(10.0, 0.0));
    }

    #[test]
    fn spec_scenario_two_apples_side_by_side() {
        let mut bodies = vec![
            Body::new(0.0, 100.0, 50.0, 1.0, 0.0),
            Body::new(40.0, 100.0, 50.0, -1.0, 0.0),
        ];

        let report = resolve_collisions(&mut bodies, CollisionParams::default());
        assert_eq!(report.resolved, 1);

        assert_abs_diff_eq!(bodies[0].pos.x, -2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(bodies[1].pos.x, 42.5, epsilon = 1e-12);
        assert_abs_diff_eq!(bodies[0].pos.y, 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bodies[1].pos.y, 100.0, epsilon = 1e-12);

        assert_abs_diff_eq!(bodies[0].velocity.x, -0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(bodies[1].velocity.x, 0.7, epsilon = 1e-12);
        assert_eq!(bodies[0].velocity.y, 0.0);
        assert_eq!(bodies[1].velocity.y, 0.0);
    }

    #[test]
    fn chained_overlaps_compound_in_order() {
        // 0 overlaps 1, 1 overlaps 2; the (1, 2) pair sees body 1 already moved.
        let mut bodies = vec![
            Body::new(0.0, 0.0, 50.0, 1.0, 0.0),
            Body::new(30.0, 0.0, 50.0, 0.0, 0.0),
            Body::new(60.0, 0.0, 50.0, -1.0, 0.0),
        ];
        let report = resolve_collisions(&mut bodies, CollisionParams::default());
        assert_eq!(report.pair_checks, 3);
        assert_eq!(report.resolved, 2);

        // (0,1): d=30, overlap=10, shift 5 each.
        assert_abs_diff_eq!(bodies[0].pos.x, -5.0, epsilon = 1e-12);
        // (1,2): body1 at 35, d=25, overlap=12.5, shift 6.25.
        assert_abs_diff_eq!(bodies[1].pos.x, 35.0 - 6.25, epsilon = 1e-12);
        assert_abs_diff_eq!(bodies[2].pos.x, 66.25, epsilon = 1e-12);

        // Velocities: (0,1) -> v0 = 0, v1 = 0.7; (1,2) -> v1 = -0.7, v2 = 0.49
        assert_abs_diff_eq!(bodies[0].velocity.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bodies[1].velocity.x, -0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(bodies[2].velocity.x, 0.49, epsilon = 1e-12);
    }

    #[test]
    fn empty_and_single_populations_are_noops() {
        let mut none: Vec<Body> = Vec::new();
        assert_eq!(resolve_collisions(&mut none, CollisionParams::default()), CollisionReport::default());

        let mut one = vec![Body::new(0.0, 0.0, 50.0, 1.0, 1.0)];
        assert_eq!(resolve_collisions(&mut one, CollisionParams::default()), CollisionReport::default());
    }
}
