//! Bounded record of accepted location samples.

use crate::models::location::LocationSample;
use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct LocationHistory {
    samples: VecDeque<LocationSample>,
    capacity: usize,
}

impl Default for LocationHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl LocationHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn record(&mut self, sample: LocationSample) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&LocationSample> {
        self.samples.back()
    }

    pub fn oldest(&self) -> Option<&LocationSample> {
        self.samples.front()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
