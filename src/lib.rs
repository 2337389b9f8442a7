//! Hand gesture control library for camera-driven generative visuals.
//!
//! This library turns raw per-frame hand landmarks from an external detector
//! into stable, continuous control signals:
//! - a smoothed cursor per hand, mirrored into `[-1, 1]` display space
//! - a stabilized finger count from the right hand (shape selection)
//! - lock (pinch or fist), hand size (zoom) and a motion label from the left hand
//!
//! The pipeline consists of:
//! 1. Role assignment from the detector's handedness labels
//! 2. Per-hand feature extraction (cursor, finger states, hand span, grip)
//! 3. Finger-count classification and temporal stabilization
//! 4. Adaptive and scalar smoothing of the continuous channels
//!
//! It performs no image processing or inference of its own.
//!
//! # Examples
//!
//! ## Processing frames
//!
//! ```no_run
//! use hand_gesture_control::{
//!     landmarks::{DetectionFrame, HandObservation, Handedness, Landmark},
//!     router::GesturePipeline,
//! };
//!
//! let mut pipeline = GesturePipeline::new();
//!
//! // Landmarks come from the external detector, 21 per hand
//! let hand = HandObservation::new([Landmark::new(0.5, 0.5, 0.0); 21], Handedness::Right);
//! let frame = DetectionFrame::new(vec![hand], 1280, 720);
//!
//! let result = pipeline.process_frame(&frame);
//! if let Some(count) = result.right_hand.finger_count {
//!     println!("Shape {count}");
//! }
//! println!("Cursor: {:.2}, {:.2}", result.right_hand.cursor.x, result.right_hand.cursor.y);
//!
//! // Camera restarted: tracking starts fresh
//! pipeline.reset();
//! ```
//!
//! ## Using the smoothers directly
//!
//! ```no_run
//! use hand_gesture_control::{
//!     filters::{AdaptiveSmoother, ScalarSmoother, Smoother},
//!     landmarks::Point2,
//! };
//!
//! let mut zoom = ScalarSmoother::new(0.1, 0.003);
//! let level = zoom.update(0.4);
//!
//! let mut cursor = AdaptiveSmoother::default();
//! let position = cursor.update(Point2::new(0.1, -0.3));
//! println!("{level:.3} {position:?}");
//!
//! cursor.reset();
//! ```
//!
//! ## Loading a configuration
//!
//! ```no_run
//! use hand_gesture_control::config::Config;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_file("gesture.yaml")?;
//! let pipeline = config.create_pipeline()?;
//! assert_eq!(pipeline.frames_processed(), 0);
//! # Ok(())
//! # }
//! ```

/// Detector-facing data model
pub mod landmarks;

/// Signal smoothing filters
pub mod filters;

/// Finger-count classification
pub mod classifier;

/// Temporal stabilization of finger counts
pub mod stabilizer;

/// Left-hand motion status detection
pub mod movement_detector;

/// Dual-hand routing and session state
pub mod router;

/// Per-frame output types
pub mod result;

/// Coordinate transformations and hand geometry
pub mod utils;

/// Error types and result handling
pub mod error;

/// Replay host application
pub mod app;

/// Constants used throughout the pipeline
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
pub use result::{DualHandResult, LeftHandResult, RightHandResult, TrackingStatus};
pub use router::GesturePipeline;
