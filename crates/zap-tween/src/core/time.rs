use std::time::Instant;

/// Supplies the delta time for each processor tick.
/// Values `<= 0` make the tick a no-op.
pub trait TimeSource {
    /// Seconds elapsed since the previous tick.
    fn delta(&mut self) -> f32;
}

impl<F: FnMut() -> f32> TimeSource for F {
    fn delta(&mut self) -> f32 {
        self()
    }
}

/// Constant delta per tick, for games stepping at a fixed rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDelta {
    dt: f32,
}

impl FixedDelta {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }

    /// The delta returned on every tick.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl TimeSource for FixedDelta {
    fn delta(&mut self) -> f32 {
        self.dt
    }
}

/// Wall-clock delta between consecutive ticks.
/// The first tick after construction or `reset` measures from that moment.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    last: Instant,
    /// Upper bound on one delta, so a stall does not teleport every tween.
    max_dt: f32,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            max_dt: 0.25,
        }
    }

    pub fn with_max_dt(mut self, max_dt: f32) -> Self {
        self.max_dt = max_dt;
        self
    }

    /// Restart measuring from now.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Stopwatch {
    fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(self.max_dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_delta_is_constant() {
        let mut ts = FixedDelta::new(1.0 / 60.0);
        assert_eq!(ts.delta(), 1.0 / 60.0);
        assert_eq!(ts.delta(), 1.0 / 60.0);
    }

    #[test]
    fn closure_source() {
        let mut frames = vec![0.5, 0.25].into_iter();
        let mut ts = move || frames.next().unwrap_or(0.0);
        assert_eq!(ts.delta(), 0.5);
        assert_eq!(ts.delta(), 0.25);
        assert_eq!(ts.delta(), 0.0);
    }

    // A copy would fork `last` and measure the same interval twice.
    static_assertions::assert_not_impl_any!(Stopwatch: Copy);

    #[test]
    fn stopwatch_is_non_negative_and_capped() {
        let mut sw = Stopwatch::new().with_max_dt(0.1);
        let dt = sw.delta();
        assert!(dt >= 0.0 && dt <= 0.1, "dt was {}", dt);
    }
}
