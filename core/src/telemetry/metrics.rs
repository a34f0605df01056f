use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Point-in-time copy of the profile request counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCounters {
    pub profiles: usize,
    pub points: usize,
    pub errors: usize,
}

/// Counts profile requests served by a long-running driver.
#[derive(Default)]
pub struct MetricsRecorder {
    inner: Mutex<ProfileCounters>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_profile(&self, point_count: usize) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.profiles += 1;
            counters.points += point_count;
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.errors += 1;
        }
    }

    pub fn snapshot(&self) -> ProfileCounters {
        self.inner
            .lock()
            .map(|counters| *counters)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_accumulates_counts() {
        let metrics = MetricsRecorder::new();
        metrics.record_profile(8);
        metrics.record_profile(3);
        metrics.record_error();
        assert_eq!(
            metrics.snapshot(),
            ProfileCounters {
                profiles: 2,
                points: 11,
                errors: 1,
            }
        );
    }

    #[test]
    fn fresh_recorder_is_zeroed() {
        assert_eq!(MetricsRecorder::new().snapshot(), ProfileCounters::default());
    }
}
