use std::time::{Duration, Instant};

/// What happened to one display callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    Presented,
    /// No drawable was available (or the surface had no extent).
    Dropped,
}

/// Summary of one reporting interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    pub elapsed: Duration,
    pub presented: u64,
    pub dropped: u64,
    /// Presented frames per second over `elapsed`.
    pub fps: f32,
}

/// Counts presented and dropped frames, yielding a report once per interval.
#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: Duration,
    window_start: Instant,
    presented: u64,
    dropped: u64,
    total_presented: u64,
    total_dropped: u64,
}

impl FrameStats {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub(crate) fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            window_start: start,
            presented: 0,
            dropped: 0,
            total_presented: 0,
            total_dropped: 0,
        }
    }

    pub(crate) fn total_presented(&self) -> u64 {
        self.total_presented
    }

    pub(crate) fn total_dropped(&self) -> u64 {
        self.total_dropped
    }

    /// Records an outcome; returns a report when the interval has elapsed.
    pub fn record(&mut self, outcome: FrameOutcome, now: Instant) -> Option<FrameReport> {
        match outcome {
            FrameOutcome::Presented => {
                self.presented += 1;
                self.total_presented += 1;
            }
            FrameOutcome::Dropped => {
                self.dropped += 1;
                self.total_dropped += 1;
            }
        }

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.interval {
            return None;
        }

        let secs = elapsed.as_secs_f32().max(f32::EPSILON);
        let report = FrameReport {
            elapsed,
            presented: self.presented,
            dropped: self.dropped,
            fps: self.presented as f32 / secs,
        };

        self.window_start = now;
        self.presented = 0;
        self.dropped = 0;

        Some(report)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_report_before_interval() {
        let t0 = Instant::now();
        let mut stats = FrameStats::starting_at(Duration::from_secs(1), t0);
        for i in 1..10 {
            let r = stats.record(FrameOutcome::Presented, t0 + Duration::from_millis(i * 16));
            assert!(r.is_none());
        }
        assert_eq!(stats.total_presented(), 9);
    }

    #[test]
    fn report_counts_and_rate() {
        let t0 = Instant::now();
        let mut stats = FrameStats::starting_at(Duration::from_secs(1), t0);

        for _ in 0..58 {
            stats.record(FrameOutcome::Presented, t0 + Duration::from_millis(500));
        }
        stats.record(FrameOutcome::Dropped, t0 + Duration::from_millis(900));

        let report = stats
            .record(FrameOutcome::Presented, t0 + Duration::from_secs(2))
            .expect("interval elapsed");

        assert_eq!(report.presented, 59);
        assert_eq!(report.dropped, 1);
        assert_eq!(report.elapsed, Duration::from_secs(2));
        assert!((report.fps - 29.5).abs() < 1e-3);
    }

    #[test]
    fn interval_counters_reset_but_totals_do_not() {
        let t0 = Instant::now();
        let mut stats = FrameStats::starting_at(Duration::from_secs(1), t0);

        stats.record(FrameOutcome::Dropped, t0 + Duration::from_secs(1));
        let next = stats.record(FrameOutcome::Presented, t0 + Duration::from_secs(2));

        let report = next.expect("second interval elapsed");
        assert_eq!(report.dropped, 0);
        assert_eq!(report.presented, 1);
        assert_eq!(stats.total_dropped(), 1);
        assert_eq!(stats.total_presented(), 1);
    }
}
