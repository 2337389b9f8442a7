//! Replay host: drives the pipeline from recorded detector output.
//!
//! Input is JSON Lines, one detector event per line, processed strictly in
//! arrival order:
//!
//! ```text
//! {"event":"frame","image_width":1280,"image_height":720,"hands":[{"side":"Right","landmarks":[...]}]}
//! {"event":"error","message":"camera permission denied"}
//! {"event":"restart"}
//! ```
//!
//! Every frame and error event produces one `DualHandResult` JSON line on
//! the output.

use crate::{
    config::Config,
    error::Result,
    landmarks::DetectionFrame,
    result::{DualHandResult, TrackingStatus},
    router::GesturePipeline,
};
use log::{info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where detector events come from
    pub input: InputSource,
    /// Pipeline calibration
    pub pipeline: Config,
    /// Log a session summary when the input ends
    pub summary: bool,
}

/// Detector event source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read events from standard input
    Stdin,
    /// Read events from a recorded file
    File(PathBuf),
}

/// One line of detector output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DetectorEvent {
    /// Landmarks for one camera frame
    Frame(DetectionFrame),
    /// Camera or detector failure
    Error {
        /// Failure description
        message: String,
    },
    /// Camera restarted; tracking starts fresh
    Restart,
}

impl DetectorEvent {
    /// Parse one JSON line
    pub fn parse(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }
}

/// Counters collected over one replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Frame events processed
    pub frames: u64,
    /// Frames with at least one active role
    pub frames_with_hands: u64,
    /// Committed finger-count changes
    pub shape_changes: u64,
    /// Frames with the left hand locked
    pub locked_frames: u64,
    /// Error events received
    pub errors: u64,
    /// Restart events received
    pub restarts: u64,
    /// Lines that could not be decoded
    pub skipped_lines: u64,
}

impl fmt::Display for SessionSummary {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lock_ratio = if self.frames == 0 {
            0.0
        } else {
            self.locked_frames as f64 / self.frames as f64 * 100.0
        };
        write!(
            f,
            "{} frames ({} with hands), {} shape changes, {:.1}% locked, {} errors, {} restarts, {} skipped lines",
            self.frames,
            self.frames_with_hands,
            self.shape_changes,
            lock_ratio,
            self.errors,
            self.restarts,
            self.skipped_lines
        )
    }
}

/// Main application struct
pub struct ReplayApp {
    config: AppConfig,
    pipeline: GesturePipeline,
    committed_count: Option<u8>,
    summary: SessionSummary,
}

impl ReplayApp {
    /// Create a new replay application
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing gesture pipeline");
        let pipeline = GesturePipeline::from_config(&config.pipeline)?;

        Ok(Self {
            config,
            pipeline,
            committed_count: None,
            summary: SessionSummary::default(),
        })
    }

    /// Run against the configured input, writing results to stdout
    pub fn run(&mut self) -> Result<SessionSummary> {
        let stdout = io::stdout();
        let mut output = stdout.lock();

        let summary = match self.config.input.clone() {
            InputSource::Stdin => {
                info!("Reading detector events from stdin");
                self.run_with(io::stdin().lock(), &mut output)?
            }
            InputSource::File(path) => {
                info!("Reading detector events from {}", path.display());
                let file = File::open(&path)?;
                self.run_with(BufReader::new(file), &mut output)?
            }
        };

        if self.config.summary {
            info!("Session summary: {summary}");
        }
        Ok(summary)
    }

    /// Process every event from `input`, writing one result line per frame
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<SessionSummary> {
        for (line_no, line) in input.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let event = match DetectorEvent::parse(line) {
                Ok(event) => event,
                Err(e) => {
                    warn!("Skipping line {}: {}", line_no + 1, e);
                    self.summary.skipped_lines += 1;
                    continue;
                }
            };

            if let Some(result) = self.handle_event(event) {
                serde_json::to_writer(&mut output, &result)?;
                writeln!(output)?;
            }
        }

        output.flush()?;
        Ok(self.summary)
    }

    /// Apply one event to the pipeline
    pub fn handle_event(&mut self, event: DetectorEvent) -> Option<DualHandResult> {
        match event {
            DetectorEvent::Frame(frame) => Some(self.handle_frame(&frame)),
            DetectorEvent::Error { message } => {
                self.summary.errors += 1;
                self.pipeline.report_error(&message);
                Some(DualHandResult::inactive(TrackingStatus::Error))
            }
            DetectorEvent::Restart => {
                self.summary.restarts += 1;
                self.pipeline.reset();
                self.committed_count = None;
                None
            }
        }
    }

    fn handle_frame(&mut self, frame: &DetectionFrame) -> DualHandResult {
        let result = self.pipeline.process_frame(frame);

        self.summary.frames += 1;
        if result.active_hands() > 0 {
            self.summary.frames_with_hands += 1;
        }
        if result.left_hand.is_locked {
            self.summary.locked_frames += 1;
        }

        if let Some(count) = result.right_hand.finger_count {
            if self.committed_count != Some(count) {
                info!("Shape change: {:?} -> {}", self.committed_count, count);
                self.committed_count = Some(count);
                self.summary.shape_changes += 1;
            }
        }

        result
    }

    /// Pipeline state, for inspection
    #[must_use]
    pub const fn pipeline(&self) -> &GesturePipeline {
        &self.pipeline
    }
}
