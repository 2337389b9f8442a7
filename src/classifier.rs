//! Per-frame finger-count classification from hand landmarks.
//!
//! A non-thumb finger is extended when its tip, PIP and MCP joints are
//! stacked strictly upward in the image (`tip.y < pip.y < mcp.y`); partial
//! curls break the chain and are rejected. The thumb moves laterally, so it
//! is judged by its horizontal distance from the index-finger base instead.

use crate::constants::{DEFAULT_THUMB_THRESHOLD, FINGER_CHAINS, INDEX_MCP, THUMB_TIP};
use crate::landmarks::HandObservation;
use log::trace;

/// Extension flags for one hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerStates {
    /// Thumb extended laterally
    pub thumb: bool,
    /// Index, middle, ring and pinky extension
    pub fingers: [bool; 4],
}

impl FingerStates {
    /// Number of extended non-thumb fingers
    #[must_use]
    pub fn extended_fingers(&self) -> u8 {
        self.fingers.iter().map(|&f| u8::from(f)).sum()
    }
}

/// Geometric finger-count classifier
#[derive(Debug, Clone)]
pub struct FingerClassifier {
    thumb_threshold: f64,
}

impl FingerClassifier {
    /// Create a classifier with the given thumb threshold
    ///
    /// # Panics
    ///
    /// Panics if the threshold is negative
    #[must_use]
    pub fn new(thumb_threshold: f64) -> Self {
        assert!(thumb_threshold >= 0.0, "Thumb threshold must be non-negative");
        Self { thumb_threshold }
    }

    /// Evaluate every finger
    #[must_use]
    pub fn finger_states(&self, hand: &HandObservation) -> FingerStates {
        let mut fingers = [false; 4];
        for (flag, &(tip, pip, mcp)) in fingers.iter_mut().zip(FINGER_CHAINS.iter()) {
            let (tip, pip, mcp) = (hand.landmark(tip).y, hand.landmark(pip).y, hand.landmark(mcp).y);
            *flag = tip < pip && pip < mcp;
        }

        let thumb_offset = (hand.landmark(THUMB_TIP).x - hand.landmark(INDEX_MCP).x).abs();

        FingerStates {
            thumb: thumb_offset > self.thumb_threshold,
            fingers,
        }
    }

    /// Count extended fingers, or `None` when the pose carries no signal
    ///
    /// The thumb only adds to the count on an otherwise open hand, so a
    /// stray lateral thumb never turns a two-finger pose into a three.
    /// A fist (no non-thumb finger extended) is ambiguous.
    #[must_use]
    pub fn classify(&self, hand: &HandObservation) -> Option<u8> {
        let states = self.finger_states(hand);
        let fingers = states.extended_fingers();
        if fingers == 0 {
            return None;
        }

        let thumb = u8::from(states.thumb && fingers == 4);
        trace!("Finger states {:?} -> {}", states, fingers + thumb);
        Some(fingers + thumb)
    }
}

impl Default for FingerClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_THUMB_THRESHOLD)
    }
}
