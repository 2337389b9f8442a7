//! Finger counting and shape-selection stability


use hand_gesture_control::classifier::FingerClassifier;
use hand_gesture_control::landmarks::Handedness;
use hand_gesture_control::stabilizer::GestureStabilizer;
use hand_gesture_control::GesturePipeline;
use test_helpers::*;

#[test]
fn test_counts_extended_fingers() {
    let classifier = FingerClassifier::default();
    let cases = [
        ([true, false, false, false], 1),
        ([true, true, false, false], 2),
        ([true, true, true, false], 3),
        ([true, true, true, true], 4),
    ];

    for (fingers, expected) in cases {
        let hand = HandPose::new(Handedness::Right).fingers(fingers).build();
        assert_eq!(classifier.classify(&hand), Some(expected), "fingers {fingers:?}");
    }
}

#[test]
fn test_open_hand_with_thumb_is_five() {
    let classifier = FingerClassifier::default();
    let hand = HandPose::new(Handedness::Right).thumb_out(true).build();
    assert_eq!(classifier.classify(&hand), Some(5));
}

#[test]
fn test_two_is_independent_of_thumb() {
    let classifier = FingerClassifier::default();
    for thumb_out in [false, true] {
        let hand = two_fingers(Handedness::Right).thumb_out(thumb_out).build();
        assert_eq!(classifier.classify(&hand), Some(2), "thumb_out {thumb_out}");
    }
}

#[test]
fn test_fist_means_no_action() {
    let classifier = FingerClassifier::default();
    let hand = HandPose::new(Handedness::Right).fist().build();
    assert_eq!(classifier.classify(&hand), None);

    let hand = HandPose::new(Handedness::Right).fist().thumb_out(true).build();
    assert_eq!(classifier.classify(&hand), None);
}

#[test]
fn test_classification_ignores_position_and_scale() {
    let classifier = FingerClassifier::default();
    for (x, y, scale) in [(0.2, 0.5, 0.6), (0.7, 0.7, 1.0), (0.5, 0.6, 1.5)] {
        let hand = HandPose::new(Handedness::Right)
            .fingers([true, true, true, false])
            .at(x, y)
            .scale(scale)
            .build();
        assert_eq!(classifier.classify(&hand), Some(3));
    }
}

#[test]
fn test_stabilizer_commits_super_majority() {
    let mut stabilizer = GestureStabilizer::default();

    let mut committed = None;
    for _ in 0..24 {
        committed = stabilizer.push(Some(2));
    }
    assert_eq!(committed, Some(2));

    for _ in 0..4 {
        committed = stabilizer.push(Some(1));
    }
    assert_eq!(stabilizer.len(), 28);
    assert_eq!(committed, Some(2));
}

#[test]
fn test_stabilizer_split_history_is_none() {
    let mut stabilizer = GestureStabilizer::default();

    let mut committed = Some(0);
    for i in 0..28 {
        committed = stabilizer.push(Some(if i % 2 == 0 { 2 } else { 1 }));
    }
    assert_eq!(committed, None);
}

#[test]
fn test_pipeline_needs_warm_up_before_committing() {
    let mut pipeline = GesturePipeline::new();
    let hand = two_fingers(Handedness::Right).build();

    for _ in 0..9 {
        assert_eq!(pipeline.process_frame(&frame(vec![hand])).right_hand.finger_count, None);
    }
    assert_eq!(pipeline.process_frame(&frame(vec![hand])).right_hand.finger_count, Some(2));
}

#[test]
fn test_pipeline_count_survives_thumb_flicker() {
    let mut pipeline = GesturePipeline::new();

    let mut count = None;
    for i in 0..28 {
        let hand = two_fingers(Handedness::Right).thumb_out(i % 3 == 0).build();
        count = pipeline.process_frame(&frame(vec![hand])).right_hand.finger_count;
    }
    assert_eq!(count, Some(2));
}

#[test]
fn test_pipeline_keeps_shape_through_brief_misread() {
    let mut pipeline = GesturePipeline::new();

    let mut count = None;
    for _ in 0..24 {
        count = pipeline
            .process_frame(&frame(vec![two_fingers(Handedness::Right).build()]))
            .right_hand
            .finger_count;
    }
    assert_eq!(count, Some(2));

    for _ in 0..4 {
        count = pipeline
            .process_frame(&frame(vec![one_finger(Handedness::Right).build()]))
            .right_hand
            .finger_count;
        assert_eq!(count, Some(2));
    }
}

#[test]
fn test_pipeline_switches_shape_once_new_count_dominates() {
    let mut pipeline = GesturePipeline::new();

    for _ in 0..28 {
        pipeline.process_frame(&frame(vec![two_fingers(Handedness::Right).build()]));
    }

    let mut count = Some(2);
    for _ in 0..28 {
        count = pipeline
            .process_frame(&frame(vec![HandPose::new(Handedness::Right).fingers([true, true, true, false]).build()]))
            .right_hand
            .finger_count;
    }
    assert_eq!(count, Some(3));
}

#[test]
fn test_fist_frames_do_not_dilute_history() {
    let mut pipeline = GesturePipeline::new();

    for _ in 0..12 {
        pipeline.process_frame(&frame(vec![two_fingers(Handedness::Right).build()]));
    }

    let mut count = None;
    for _ in 0..20 {
        count = pipeline
            .process_frame(&frame(vec![HandPose::new(Handedness::Right).fist().build()]))
            .right_hand
            .finger_count;
    }
    assert_eq!(count, Some(2));
}
