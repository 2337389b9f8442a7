//! Dual-hand routing: the per-frame entry point of the pipeline.
//!
//! Each detected hand is assigned a role from the detector's handedness
//! label. The right hand selects shapes through its finger count; the left
//! hand drives rotation (cursor), zoom (hand size) and lock (pinch or fist).
//! Every channel owns its own filter state, so the two hands never share a
//! smoother.
//!
//! Session status follows `Starting -> Online <-> NoHands`. `Error` is only
//! entered through [`GesturePipeline::report_error`] and only left through
//! [`GesturePipeline::reset`].

use crate::classifier::FingerClassifier;
use crate::config::{Config, DepthConfig, GestureConfig};
use crate::filters::{AdaptiveSmoother, AdaptiveSmootherParams, ScalarSmoother, Smoother};
use crate::landmarks::{DetectionFrame, HandObservation, Handedness};
use crate::movement_detector::MovementDetector;
use crate::result::{DualHandResult, LeftHandResult, RightHandResult, TrackingStatus};
use crate::stabilizer::GestureStabilizer;
use crate::utils::{cursor_position, hand_span, is_fist, is_pinching, remap_depth};
use crate::Result;
use log::{debug, error, info, warn};

/// Stateful gesture pipeline for one tracking session
pub struct GesturePipeline {
    status: TrackingStatus,
    right_cursor: AdaptiveSmoother,
    left_cursor: AdaptiveSmoother,
    left_lock: ScalarSmoother,
    left_zoom: ScalarSmoother,
    classifier: FingerClassifier,
    stabilizer: GestureStabilizer,
    motion: MovementDetector,
    depth: DepthConfig,
    gesture: GestureConfig,
    frames_processed: u64,
}

impl GesturePipeline {
    /// Create a pipeline with default calibration
    #[must_use]
    pub fn new() -> Self {
        let config = Config::default();
        Self::build(&config)
    }

    /// Create a pipeline from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the configuration fails validation
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &Config) -> Self {
        let cursor: AdaptiveSmootherParams = config.cursor;
        Self {
            status: TrackingStatus::Starting,
            right_cursor: AdaptiveSmoother::new(cursor),
            left_cursor: AdaptiveSmoother::new(cursor),
            left_lock: config.lock.create_smoother(),
            left_zoom: config.zoom.create_smoother(),
            classifier: FingerClassifier::new(config.classifier.thumb_threshold),
            stabilizer: GestureStabilizer::new(
                config.stabilizer.capacity,
                config.stabilizer.min_samples,
                config.stabilizer.majority,
            ),
            motion: MovementDetector::new(config.motion.window_size, config.motion.std_dev_threshold),
            depth: config.depth,
            gesture: config.gesture,
            frames_processed: 0,
        }
    }

    /// Process one detector frame
    ///
    /// Never fails: a frame with no usable hands still yields a well-formed
    /// result with both roles inactive. Filter state survives detection gaps.
    pub fn process_frame(&mut self, frame: &DetectionFrame) -> DualHandResult {
        if self.status == TrackingStatus::Error {
            debug!("Frame ignored while the session is in the error state");
            return DualHandResult::inactive(TrackingStatus::Error);
        }

        self.frames_processed += 1;
        let (right, left) = Self::assign_roles(frame);
        let aspect = frame.aspect_ratio();

        let right_hand = right.map(|hand| self.process_right(hand)).unwrap_or_default();
        let left_hand = left.map(|hand| self.process_left(hand, aspect)).unwrap_or_default();

        let status = if frame.hands.is_empty() {
            TrackingStatus::NoHands
        } else {
            TrackingStatus::Online
        };
        self.transition(status);

        DualHandResult {
            status,
            right_hand,
            left_hand,
        }
    }

    /// Pick at most one usable hand per role
    fn assign_roles(frame: &DetectionFrame) -> (Option<&HandObservation>, Option<&HandObservation>) {
        let mut right = None;
        let mut left = None;

        for (index, hand) in frame.hands.iter().enumerate() {
            if !hand.is_finite() {
                debug!("Skipping hand {index}: non-finite landmarks");
                continue;
            }
            let slot = match hand.side {
                Handedness::Right => &mut right,
                Handedness::Left => &mut left,
            };
            if slot.is_some() {
                warn!("Skipping hand {index}: second {:?} hand in one frame", hand.side);
                continue;
            }
            *slot = Some(hand);
        }

        (right, left)
    }

    fn process_right(&mut self, hand: &HandObservation) -> RightHandResult {
        let cursor = self.right_cursor.update(cursor_position(hand));
        let raw_count = self.classifier.classify(hand);
        let finger_count = self.stabilizer.push(raw_count);
        debug!("Right hand: raw count {raw_count:?}, stable {finger_count:?}");

        RightHandResult {
            finger_count,
            cursor,
            active: true,
        }
    }

    fn process_left(&mut self, hand: &HandObservation, aspect: f64) -> LeftHandResult {
        let cursor = self.left_cursor.update(cursor_position(hand));

        let depth = remap_depth(hand_span(hand, aspect), self.depth.far, self.depth.near, self.depth.exponent);
        let hand_size = self.left_zoom.update(depth);

        let gripping = is_pinching(hand, aspect, self.gesture.pinch_threshold)
            || is_fist(hand, aspect, self.gesture.fist_radius);
        let lock_level = self.left_lock.update(if gripping { 1.0 } else { 0.0 });
        let is_locked = lock_level > self.gesture.lock_threshold;

        let motion_status = self.motion.status(cursor, is_locked);
        debug!("Left hand: size {hand_size:.3}, lock {lock_level:.3}, {motion_status}");

        LeftHandResult {
            cursor,
            active: true,
            is_locked,
            hand_size,
            motion_status,
        }
    }

    fn transition(&mut self, next: TrackingStatus) {
        if self.status != next {
            info!("Tracking status: {} -> {}", self.status, next);
            self.status = next;
        }
    }

    /// Enter the error state after an upstream camera or detector failure
    pub fn report_error(&mut self, reason: &str) {
        error!("Detector failure: {reason}");
        self.status = TrackingStatus::Error;
    }

    /// Start a fresh session: clear every channel and return to `Starting`
    pub fn reset(&mut self) {
        info!("Resetting gesture pipeline after {} frames", self.frames_processed);
        self.right_cursor.reset();
        self.left_cursor.reset();
        self.left_lock.reset();
        self.left_zoom.reset();
        self.stabilizer.clear();
        self.motion.reset();
        self.status = TrackingStatus::Starting;
        self.frames_processed = 0;
    }

    /// Current session status
    #[must_use]
    pub const fn status(&self) -> TrackingStatus {
        self.status
    }

    /// Frames processed since the session started
    #[must_use]
    pub const fn frames_processed(&self) -> u64 {
        self.frames_processed
    }
}

impl Default for GesturePipeline {
    fn default() -> Self {
        Self::new()
    }
}
