//! Decides whether a new location sample differs enough from the last
//! accepted one to warrant a new proximity check.

use crate::core::calculator::distance::distance;
use crate::models::location::LocationSample;

pub const DEFAULT_MIN_DISTANCE_M: f64 = 10.0;
pub const DEFAULT_MIN_INTERVAL_MS: i64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceFilter {
    /// Movement strictly above this many meters is significant.
    pub min_distance_m: f64,
    /// Elapsed time strictly above this many milliseconds is significant.
    pub min_interval_ms: i64,
}

impl Default for SignificanceFilter {
    fn default() -> Self {
        Self {
            min_distance_m: DEFAULT_MIN_DISTANCE_M,
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
        }
    }
}

impl SignificanceFilter {
    pub fn new(min_distance_m: f64, min_interval_ms: i64) -> Self {
        Self {
            min_distance_m,
            min_interval_ms,
        }
    }

    /// `true` when there is no previous sample, or the new one moved farther
    /// than `min_distance_m`, or is more than `min_interval_ms` newer.
    pub fn is_significant(&self, last: Option<&LocationSample>, next: &LocationSample) -> bool {
        let Some(prev) = last else {
            return true;
        };

        let moved = distance(&prev.coordinate, &next.coordinate);
        let elapsed = next.timestamp.saturating_sub(prev.timestamp);

        moved > self.min_distance_m || elapsed > self.min_interval_ms
    }
}
