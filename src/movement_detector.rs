//! Movement detection for the left-hand cursor.
//!
//! Statistical analysis of the smoothed cursor over a rolling window decides
//! whether the hand is rotating the scene or holding steady, which feeds the
//! `motion_status` label of the left-hand result.

use crate::constants::{DEFAULT_MOTION_THRESHOLD, DEFAULT_MOTION_WINDOW};
use crate::landmarks::Point2;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Motion label reported for the left hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MotionStatus {
    /// No left hand in frame
    #[default]
    Inactive,
    /// Lock gesture held; rotation is frozen
    Locked,
    /// Cursor is moving
    Rotating,
    /// Cursor is still
    Steady,
}

impl MotionStatus {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "INACTIVE",
            Self::Locked => "LOCKED",
            Self::Rotating => "ROTATING",
            Self::Steady => "STEADY",
        }
    }
}

impl fmt::Display for MotionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movement detector using statistical analysis
#[derive(Debug, Clone)]
pub struct MovementDetector {
    window_size: usize,
    movement_threshold: f64,
    x_history: VecDeque<f64>,
    y_history: VecDeque<f64>,
}

impl MovementDetector {
    /// Create a new movement detector
    #[must_use]
    pub fn new(window_size: usize, movement_threshold: f64) -> Self {
        Self {
            window_size,
            movement_threshold,
            x_history: VecDeque::with_capacity(window_size),
            y_history: VecDeque::with_capacity(window_size),
        }
    }

    /// Update with a new cursor position and detect if moving
    pub fn update(&mut self, position: Point2) -> bool {
        if self.window_size == 0 {
            return false;
        }

        if self.x_history.len() >= self.window_size {
            self.x_history.pop_front();
            self.y_history.pop_front();
        }

        self.x_history.push_back(position.x);
        self.y_history.push_back(position.y);

        // A short history cannot tell tremor from motion yet
        if self.x_history.len() < 2 {
            return false;
        }

        let x_stats = Self::calculate_stats(&self.x_history);
        let y_stats = Self::calculate_stats(&self.y_history);

        x_stats.std_dev > self.movement_threshold || y_stats.std_dev > self.movement_threshold
    }

    /// Classify one frame of the left hand
    pub fn status(&mut self, position: Point2, is_locked: bool) -> MotionStatus {
        let moving = self.update(position);
        if is_locked {
            MotionStatus::Locked
        } else if moving {
            MotionStatus::Rotating
        } else {
            MotionStatus::Steady
        }
    }

    /// Get current statistics
    #[must_use]
    pub fn get_stats(&self) -> Option<(Statistics, Statistics)> {
        if self.x_history.len() < self.window_size || self.window_size == 0 {
            return None;
        }

        Some((
            Self::calculate_stats(&self.x_history),
            Self::calculate_stats(&self.y_history),
        ))
    }

    /// Reset the detector
    pub fn reset(&mut self) {
        self.x_history.clear();
        self.y_history.clear();
    }

    /// Calculate statistics for a data window
    #[allow(clippy::cast_precision_loss)]
    fn calculate_stats(data: &VecDeque<f64>) -> Statistics {
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;

        let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        let std_dev = variance.sqrt();

        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Statistics {
            mean,
            std_dev,
            min,
            max,
            range: max - min,
        }
    }
}

impl Default for MovementDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MOTION_WINDOW, DEFAULT_MOTION_THRESHOLD)
    }
}

/// Statistical summary of a data window
#[derive(Debug, Clone, Copy)]
pub struct Statistics {
    /// Mean value of the data
    pub mean: f64,
    /// Standard deviation of the data
    pub std_dev: f64,
    /// Minimum value in the window
    pub min: f64,
    /// Maximum value in the window
    pub max: f64,
    /// Range (max - min) of the data
    pub range: f64,
}
