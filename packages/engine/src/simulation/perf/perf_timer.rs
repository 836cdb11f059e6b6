//! Wall-clock stopwatch for perf metrics
//!
//! `wasm32` reads `Date.now()` through js-sys (millisecond resolution); native
//! builds use `Instant`, so tests time the same code paths.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn millis_between(from: Stamp, to: Stamp) -> f64 {
    // Date.now() can step backwards when the system clock is adjusted
    (to - from).max(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn millis_between(from: Stamp, to: Stamp) -> f64 {
    to.saturating_duration_since(from).as_secs_f64() * 1000.0
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    mark: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { mark: now() }
    }

    /// Milliseconds since the current mark
    pub(crate) fn elapsed_ms(&self) -> f64 {
        millis_between(self.mark, now())
    }

    /// Milliseconds since the current mark, then move the mark to now
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let t = now();
        let ms = millis_between(self.mark, t);
        self.mark = t;
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laps_never_go_negative() {
        let mut timer = PerfTimer::start();
        let total = timer;
        let first = timer.lap_ms();
        let second = timer.lap_ms();
        assert!(first >= 0.0 && second >= 0.0);
        assert!(total.elapsed_ms() >= 0.0);
    }
}
