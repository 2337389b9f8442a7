//! Benchmarks for full-frame pipeline processing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hand_gesture_control::constants::{FINGER_CHAINS, NUM_HAND_LANDMARKS, THUMB_TIP, WRIST};
use hand_gesture_control::landmarks::{DetectionFrame, HandObservation, Handedness, Landmark};
use hand_gesture_control::GesturePipeline;

/// Open hand anchored at the index knuckle, with detector jitter
fn noisy_hand(side: Handedness, x: f64, y: f64) -> HandObservation {
    let jitter = || 0.004 * (rand::random::<f64>() - 0.5);
    let point = |dx: f64, dy: f64| Landmark::new(x + dx + jitter(), y + dy + jitter(), jitter());

    let mut landmarks = [point(0.045, 0.15); NUM_HAND_LANDMARKS];
    landmarks[WRIST] = point(0.045, 0.15);
    for (i, &(tip, pip, mcp)) in FINGER_CHAINS.iter().enumerate() {
        let dx = 0.03 * i as f64;
        landmarks[mcp] = point(dx, 0.0);
        landmarks[pip] = point(dx, -0.07);
        landmarks[pip + 1] = point(dx, -0.11);
        landmarks[tip] = point(dx, -0.15);
    }
    landmarks[THUMB_TIP] = point(-0.2, 0.05);

    HandObservation::new(landmarks, side)
}

fn benchmark_process_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_frame");

    let frames: Vec<(&str, Vec<DetectionFrame>)> = vec![
        ("empty", (0..100).map(|_| DetectionFrame::new(Vec::new(), 1280, 720)).collect()),
        (
            "right_only",
            (0..100)
                .map(|i| {
                    let t = f64::from(i) * 0.05;
                    DetectionFrame::new(vec![noisy_hand(Handedness::Right, 0.2f64.mul_add(t.sin(), 0.6), 0.5)], 1280, 720)
                })
                .collect(),
        ),
        (
            "both_hands",
            (0..100)
                .map(|i| {
                    let t = f64::from(i) * 0.05;
                    DetectionFrame::new(
                        vec![
                            noisy_hand(Handedness::Left, 0.1f64.mul_add(t.cos(), 0.3), 0.5),
                            noisy_hand(Handedness::Right, 0.2f64.mul_add(t.sin(), 0.6), 0.5),
                        ],
                        1280,
                        720,
                    )
                })
                .collect(),
        ),
    ];

    for (name, data) in &frames {
        let mut pipeline = GesturePipeline::new();

        group.bench_with_input(BenchmarkId::new("single_frame", *name), &data[0], |b, frame| {
            b.iter(|| black_box(pipeline.process_frame(black_box(frame))));
        });

        group.bench_with_input(BenchmarkId::new("sequence_100", *name), data, |b, data| {
            b.iter(|| {
                pipeline.reset();
                for frame in data {
                    black_box(pipeline.process_frame(black_box(frame)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_result_serialization(c: &mut Criterion) {
    let mut pipeline = GesturePipeline::new();
    let frame = DetectionFrame::new(
        vec![
            noisy_hand(Handedness::Left, 0.3, 0.5),
            noisy_hand(Handedness::Right, 0.6, 0.5),
        ],
        1280,
        720,
    );
    let result = pipeline.process_frame(&frame);

    c.bench_function("result_to_json", |b| {
        b.iter(|| black_box(serde_json::to_string(black_box(&result))));
    });
}

criterion_group!(benches, benchmark_process_frame, benchmark_result_serialization);
criterion_main!(benches);
