//! Temporal stabilization of per-frame finger counts.
//!
//! A rolling FIFO of recent counts only commits to a value once it has
//! enough samples and one value holds a super-majority, so single-frame
//! misreads never reach the shape selection.

use crate::constants::{
    DEFAULT_STABILIZER_CAPACITY, DEFAULT_STABILIZER_MAJORITY, DEFAULT_STABILIZER_MIN_SAMPLES, MAX_FINGER_COUNT,
};
use std::collections::VecDeque;

/// Super-majority vote over recent finger counts
#[derive(Debug, Clone)]
pub struct GestureStabilizer {
    capacity: usize,
    min_samples: usize,
    majority: f64,
    history: VecDeque<u8>,
}

impl GestureStabilizer {
    /// Create a new stabilizer
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero, `min_samples` exceeds the capacity,
    /// or `majority` is not in (0, 1]
    #[must_use]
    pub fn new(capacity: usize, min_samples: usize, majority: f64) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");
        assert!(min_samples <= capacity, "Minimum samples must not exceed capacity");
        assert!(majority > 0.0 && majority <= 1.0, "Majority must be in (0, 1]");
        Self {
            capacity,
            min_samples,
            majority,
            history: VecDeque::with_capacity(capacity),
        }
    }

    /// Record one classification and return the committed count
    ///
    /// `None` samples are dropped rather than recorded, so a brief misread
    /// does not dilute the history.
    pub fn push(&mut self, sample: Option<u8>) -> Option<u8> {
        if let Some(count) = sample {
            if self.history.len() >= self.capacity {
                self.history.pop_front();
            }
            self.history.push_back(count);
        }
        self.stable_count()
    }

    /// Committed count for the current history, if any
    #[must_use]
    pub fn stable_count(&self) -> Option<u8> {
        let len = self.history.len();
        if len == 0 || len < self.min_samples {
            return None;
        }

        let mut votes: Vec<(u8, usize)> = Vec::with_capacity(usize::from(MAX_FINGER_COUNT) + 1);
        for &count in &self.history {
            match votes.iter_mut().find(|(value, _)| *value == count) {
                Some((_, n)) => *n += 1,
                None => votes.push((count, 1)),
            }
        }

        let (mode, frequency) = votes.into_iter().max_by_key(|&(_, n)| n)?;

        #[allow(clippy::cast_precision_loss)]
        let share = frequency as f64 / len as f64;
        (share >= self.majority).then_some(mode)
    }

    /// Number of recorded samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True if no samples are recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Maximum number of retained samples
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all history
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for GestureStabilizer {
    fn default() -> Self {
        Self::new(
            DEFAULT_STABILIZER_CAPACITY,
            DEFAULT_STABILIZER_MIN_SAMPLES,
            DEFAULT_STABILIZER_MAJORITY,
        )
    }
}
