//! Random number generation (xorshift32)
//!
//! Small and deterministic for a given seed, which is all spawning needs.

/// Advance the xorshift32 state and return the new value.
///
/// A zero state is a fixed point of xorshift; callers seed through `seed_state`.
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform in `[0, 1)`
#[inline]
pub(super) fn next_unit(state: &mut u32) -> f64 {
    xorshift32(state) as f64 / (u32::MAX as f64 + 1.0)
}

pub(super) fn seed_state(seed: u32) -> u32 {
    if seed == 0 {
        crate::domain::settings::DEFAULT_SEED
    } else {
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_values_stay_in_range() {
        let mut state = seed_state(0);
        assert_ne!(state, 0);
        for _ in 0..10_000 {
            let r = next_unit(&mut state);
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = seed_state(42);
        let mut b = seed_state(42);
        for _ in 0..32 {
            assert_eq!(xorshift32(&mut a), xorshift32(&mut b));
        }
    }
}
