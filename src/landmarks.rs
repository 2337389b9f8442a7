//! Detector-facing data model: landmarks, per-hand observations and frames.
//!
//! Everything here is produced by the external hand-landmark detector and is
//! only ever read by the pipeline.

use crate::constants::NUM_HAND_LANDMARKS;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A single landmark in normalized image space
///
/// `x` and `y` lie in `[0, 1]` with `y` growing downward; `z` is depth
/// relative to the wrist, on roughly the same scale as `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal image coordinate
    pub x: f64,
    /// Vertical image coordinate
    pub y: f64,
    /// Relative depth
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    /// Create a landmark
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True if every coordinate is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Distance to another landmark with `x` and `z` scaled by the image aspect
    /// ratio, so that all three axes are measured in image heights.
    #[must_use]
    pub fn isotropic_distance(&self, other: &Self, aspect: f64) -> f64 {
        let delta = Vector3::new(
            (self.x - other.x) * aspect,
            self.y - other.y,
            (self.z - other.z) * aspect,
        );
        delta.norm()
    }
}

/// Handedness label assigned by the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    /// Drives rotation, zoom and lock
    #[serde(alias = "left", alias = "LEFT")]
    Left,
    /// Drives finger-count shape selection
    #[serde(alias = "right", alias = "RIGHT")]
    Right,
}

/// One detected hand in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    /// All 21 landmarks in detector order
    pub landmarks: [Landmark; NUM_HAND_LANDMARKS],
    /// Detector-provided handedness
    pub side: Handedness,
}

impl HandObservation {
    /// Create an observation
    #[must_use]
    pub const fn new(landmarks: [Landmark; NUM_HAND_LANDMARKS], side: Handedness) -> Self {
        Self { landmarks, side }
    }

    /// Landmark at a detector index
    #[must_use]
    pub fn landmark(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }

    /// True if every landmark is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.landmarks.iter().all(Landmark::is_finite)
    }
}

/// All detections for one camera frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionFrame {
    /// Zero or more detected hands
    #[serde(default)]
    pub hands: Vec<HandObservation>,
    /// Source image width in pixels
    #[serde(default)]
    pub image_width: u32,
    /// Source image height in pixels
    #[serde(default)]
    pub image_height: u32,
}

impl DetectionFrame {
    /// Create a frame
    #[must_use]
    pub fn new(hands: Vec<HandObservation>, image_width: u32, image_height: u32) -> Self {
        Self {
            hands,
            image_width,
            image_height,
        }
    }

    /// Width / height of the source image, or 1.0 when the size is unknown
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        if self.image_width == 0 || self.image_height == 0 {
            1.0
        } else {
            f64::from(self.image_width) / f64::from(self.image_height)
        }
    }
}

/// A 2D point in display space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point2 {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
