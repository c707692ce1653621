use std::time::{Duration, Instant};

/// When a display callback fired, relative to the previous one.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous callback, within the clock's clamps.
    pub dt: f32,

    /// Callback time; also the timestamp fed to `FrameStats`.
    pub now: Instant,

    /// Number of callbacks before this one, presented or not.
    pub frame_index: u64,
}

/// Stamps each display callback of one window.
///
/// `dt` stays within `[dt_min, dt_max]`: the triangle does not animate, but the
/// fps report should not be skewed by a stall or a backwards clock.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Restarts timing from now; the runtime calls this when a minimized
    /// window gets an extent again.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub(crate) fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_from_zero() {
        let mut clock = FrameClock::new();
        let t0 = clock.last;
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn dt_tracks_elapsed_time() {
        let mut clock = FrameClock::new();
        let t0 = clock.last;
        let ft = clock.tick_at(t0 + Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-4);
    }

    #[test]
    fn dt_is_clamped_both_ways() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(100));
        let t0 = clock.last;

        let stalled = clock.tick_at(t0 + Duration::from_secs(5));
        assert!((stalled.dt - 0.1).abs() < 1e-6);

        let tight = clock.tick_at(stalled.now);
        assert!((tight.dt - 0.001).abs() < 1e-6);
    }

    #[test]
    fn time_going_backwards_is_clamped_to_minimum() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(2), Duration::from_millis(100));
        let t0 = clock.last;
        clock.tick_at(t0 + Duration::from_millis(50));
        let ft = clock.tick_at(t0);
        assert!((ft.dt - 0.002).abs() < 1e-6);
    }
}
