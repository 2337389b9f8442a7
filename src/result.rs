//! Per-frame pipeline output consumed by the rendering and audio layers.

use crate::landmarks::Point2;
use crate::movement_detector::MotionStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session-level tracking status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingStatus {
    /// No frame processed since the session (re)started
    #[default]
    Starting,
    /// At least one hand in the current frame
    Online,
    /// Current frame has no hands
    NoHands,
    /// Upstream camera or detector failure; cleared only by a restart
    Error,
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Starting => "STARTING",
            Self::Online => "ONLINE",
            Self::NoHands => "NO_HANDS",
            Self::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// Right-hand (shape selection) sub-result
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RightHandResult {
    /// Stabilized finger count; `None` means "no action"
    pub finger_count: Option<u8>,
    /// Smoothed cursor in display space, `[-1, 1]` on both axes
    pub cursor: Point2,
    /// Hand present in this frame
    pub active: bool,
}

/// Left-hand (rotation, zoom, lock) sub-result
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeftHandResult {
    /// Smoothed cursor in display space, `[-1, 1]` on both axes
    pub cursor: Point2,
    /// Hand present in this frame
    pub active: bool,
    /// Pinch or fist held
    pub is_locked: bool,
    /// Depth proxy in `[0, 1]`, larger is closer
    pub hand_size: f64,
    /// Motion label
    pub motion_status: MotionStatus,
}

/// Unified per-frame output
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualHandResult {
    /// Session status after this frame
    pub status: TrackingStatus,
    /// Right-hand role
    pub right_hand: RightHandResult,
    /// Left-hand role
    pub left_hand: LeftHandResult,
}

impl DualHandResult {
    /// Result with both roles inactive
    #[must_use]
    pub fn inactive(status: TrackingStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Number of active roles
    #[must_use]
    pub fn active_hands(&self) -> usize {
        usize::from(self.right_hand.active) + usize::from(self.left_hand.active)
    }
}
