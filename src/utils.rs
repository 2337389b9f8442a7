//! Coordinate transformations and hand geometry helpers.

use crate::constants::{DEPTH_REFERENCE_KNUCKLES, INDEX_TIP, NON_THUMB_TIPS, THUMB_TIP, WRIST};
use crate::landmarks::{HandObservation, Landmark, Point2};

/// Map a landmark from image space to display space
///
/// The camera feed is mirrored, so `x` is flipped before `[0, 1]` is mapped
/// to `[-1, 1]`. Image `y` grows downward while display `y` grows upward.
/// Coordinates slightly outside the image are clamped to its edge.
#[must_use]
pub fn to_display_space(landmark: &Landmark) -> Point2 {
    let x = landmark.x.clamp(0.0, 1.0);
    let y = landmark.y.clamp(0.0, 1.0);
    Point2::new((1.0 - x).mul_add(2.0, -1.0), -y.mul_add(2.0, -1.0))
}

/// Cursor position of a hand: its index fingertip in display space
#[must_use]
pub fn cursor_position(hand: &HandObservation) -> Point2 {
    to_display_space(hand.landmark(INDEX_TIP))
}

/// Mean aspect-corrected 3D distance from the wrist to the reference knuckles
#[must_use]
pub fn hand_span(hand: &HandObservation, aspect: f64) -> f64 {
    let wrist = hand.landmark(WRIST);
    let total: f64 = DEPTH_REFERENCE_KNUCKLES
        .iter()
        .map(|&knuckle| wrist.isotropic_distance(hand.landmark(knuckle), aspect))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let count = DEPTH_REFERENCE_KNUCKLES.len() as f64;
    total / count
}

/// Remap a hand span through the far/near calibration window to `[0, 1]`
///
/// # Panics
///
/// Panics in debug builds if `near <= far`
#[must_use]
pub fn remap_depth(span: f64, far: f64, near: f64, exponent: f64) -> f64 {
    debug_assert!(near > far, "Depth near bound must be greater than far bound");
    ((span - far) / (near - far)).clamp(0.0, 1.0).powf(exponent)
}

/// Thumb tip close to the index tip
#[must_use]
pub fn is_pinching(hand: &HandObservation, aspect: f64, threshold: f64) -> bool {
    hand.landmark(THUMB_TIP)
        .isotropic_distance(hand.landmark(INDEX_TIP), aspect)
        < threshold
}

/// All four non-thumb fingertips curled in near the wrist
#[must_use]
pub fn is_fist(hand: &HandObservation, aspect: f64, radius: f64) -> bool {
    let wrist = hand.landmark(WRIST);
    NON_THUMB_TIPS
        .iter()
        .all(|&tip| wrist.isotropic_distance(hand.landmark(tip), aspect) < radius)
}
