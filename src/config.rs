//! Configuration management for the gesture control pipeline
//!
//! Every numeric value here is an empirically tuned "feel" parameter. The
//! defaults reproduce the installation's calibration and can be overridden
//! from a YAML file.

use crate::constants::{
    DEFAULT_DEPTH_EXPONENT, DEFAULT_DEPTH_FAR, DEFAULT_DEPTH_NEAR, DEFAULT_FIST_RADIUS, DEFAULT_LOCK_ALPHA,
    DEFAULT_LOCK_DEAD_ZONE, DEFAULT_LOCK_THRESHOLD, DEFAULT_MOTION_THRESHOLD, DEFAULT_MOTION_WINDOW,
    DEFAULT_PINCH_THRESHOLD, DEFAULT_STABILIZER_CAPACITY, DEFAULT_STABILIZER_MAJORITY,
    DEFAULT_STABILIZER_MIN_SAMPLES, DEFAULT_THUMB_THRESHOLD, DEFAULT_ZOOM_ALPHA, DEFAULT_ZOOM_DEAD_ZONE,
};
use crate::filters::{AdaptiveSmootherParams, ScalarSmoother};
use crate::router::GesturePipeline;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Adaptive smoothing shared by both cursors
    pub cursor: AdaptiveSmootherParams,

    /// Hand-size (zoom) smoothing
    pub zoom: ScalarConfig,

    /// Lock signal smoothing
    pub lock: ScalarConfig,

    /// Finger-count classifier
    pub classifier: ClassifierConfig,

    /// Finger-count stabilization
    pub stabilizer: StabilizerConfig,

    /// Hand-size calibration
    pub depth: DepthConfig,

    /// Pinch and fist lock detection
    pub gesture: GestureConfig,

    /// Left-hand motion status
    pub motion: MovementConfig,
}

/// Scalar smoother parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarConfig {
    /// Blend factor per frame
    pub alpha: f64,

    /// Minimum change before the reported value moves
    pub dead_zone: f64,
}

/// Finger-count classifier parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Horizontal thumb-tip to index-base distance for an extended thumb
    pub thumb_threshold: f64,
}

/// Finger-count stabilization parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilizerConfig {
    /// History length
    pub capacity: usize,

    /// Samples required before any count is committed
    pub min_samples: usize,

    /// Share of the history the winning count must hold (0.0-1.0)
    pub majority: f64,
}

/// Hand-size calibration window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthConfig {
    /// Wrist-to-knuckle distance of a hand far from the camera
    pub far: f64,

    /// Wrist-to-knuckle distance of a hand close to the camera
    pub near: f64,

    /// Response curve exponent
    pub exponent: f64,
}

/// Lock gesture thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Thumb-tip to index-tip distance below which the hand pinches
    pub pinch_threshold: f64,

    /// Radius around the wrist containing every fingertip of a fist
    pub fist_radius: f64,

    /// Smoothed lock value above which the hand counts as locked
    pub lock_threshold: f64,
}

/// Motion status configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Window size for statistics calculation
    pub window_size: usize,

    /// Standard deviation threshold for movement detection
    pub std_dev_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cursor: AdaptiveSmootherParams::default(),
            zoom: ScalarConfig {
                alpha: DEFAULT_ZOOM_ALPHA,
                dead_zone: DEFAULT_ZOOM_DEAD_ZONE,
            },
            lock: ScalarConfig {
                alpha: DEFAULT_LOCK_ALPHA,
                dead_zone: DEFAULT_LOCK_DEAD_ZONE,
            },
            classifier: ClassifierConfig::default(),
            stabilizer: StabilizerConfig::default(),
            depth: DepthConfig::default(),
            gesture: GestureConfig::default(),
            motion: MovementConfig::default(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            thumb_threshold: DEFAULT_THUMB_THRESHOLD,
        }
    }
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_STABILIZER_CAPACITY,
            min_samples: DEFAULT_STABILIZER_MIN_SAMPLES,
            majority: DEFAULT_STABILIZER_MAJORITY,
        }
    }
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            far: DEFAULT_DEPTH_FAR,
            near: DEFAULT_DEPTH_NEAR,
            exponent: DEFAULT_DEPTH_EXPONENT,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
            fist_radius: DEFAULT_FIST_RADIUS,
            lock_threshold: DEFAULT_LOCK_THRESHOLD,
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_MOTION_WINDOW,
            std_dev_threshold: DEFAULT_MOTION_THRESHOLD,
        }
    }
}

impl ScalarConfig {
    /// Build a smoother from these parameters
    #[must_use]
    pub fn create_smoother(&self) -> ScalarSmoother {
        ScalarSmoother::new(self.alpha, self.dead_zone)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Create a pipeline from configuration
    pub fn create_pipeline(&self) -> Result<GesturePipeline> {
        GesturePipeline::from_config(self)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.cursor
            .check()
            .map_err(|msg| Error::ConfigError(format!("Cursor smoothing: {msg}")))?;

        for (name, scalar) in [("Zoom", &self.zoom), ("Lock", &self.lock)] {
            if !(scalar.alpha > 0.0 && scalar.alpha <= 1.0) {
                return Err(Error::ConfigError(format!("{name} alpha must be in (0, 1]")));
            }
            if scalar.dead_zone < 0.0 {
                return Err(Error::ConfigError(format!("{name} dead zone must be non-negative")));
            }
        }

        if self.classifier.thumb_threshold < 0.0 {
            return Err(Error::ConfigError(
                "Thumb threshold must be non-negative".to_string(),
            ));
        }

        if self.stabilizer.capacity == 0 {
            return Err(Error::ConfigError(
                "Stabilizer capacity must be greater than 0".to_string(),
            ));
        }
        if self.stabilizer.min_samples > self.stabilizer.capacity {
            return Err(Error::ConfigError(
                "Stabilizer minimum samples must not exceed capacity".to_string(),
            ));
        }
        if !(self.stabilizer.majority > 0.0 && self.stabilizer.majority <= 1.0) {
            return Err(Error::ConfigError(
                "Stabilizer majority must be in (0, 1]".to_string(),
            ));
        }

        if self.depth.near <= self.depth.far {
            return Err(Error::ConfigError(
                "Depth near bound must be greater than far bound".to_string(),
            ));
        }
        if self.depth.exponent <= 0.0 {
            return Err(Error::ConfigError("Depth exponent must be positive".to_string()));
        }

        if self.gesture.pinch_threshold < 0.0 || self.gesture.fist_radius < 0.0 {
            return Err(Error::ConfigError(
                "Pinch threshold and fist radius must be non-negative".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.gesture.lock_threshold) {
            return Err(Error::ConfigError(
                "Lock threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.motion.std_dev_threshold < 0.0 {
            return Err(Error::ConfigError(
                "Motion threshold must be non-negative".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Control Configuration

# Adaptive cursor smoothing (display space, [-1, 1])
cursor:
  dead_zone: 0.005
  min_alpha: 0.04
  max_alpha: 0.38
  velocity_threshold: 0.12
  max_delta: 0.15
  ease: true

# Hand-size (zoom) smoothing
zoom:
  alpha: 0.1
  dead_zone: 0.003

# Lock signal smoothing
lock:
  alpha: 0.2
  dead_zone: 0.002

# Finger-count classifier
classifier:
  thumb_threshold: 0.12

# Finger-count stabilization
stabilizer:
  capacity: 28
  min_samples: 10
  majority: 0.8

# Hand-size calibration (wrist to knuckle distance, image heights)
depth:
  far: 0.04
  near: 0.46
  exponent: 1.25

# Lock gesture detection
gesture:
  pinch_threshold: 0.06
  fist_radius: 0.18
  lock_threshold: 0.5

# Left-hand motion status
motion:
  window_size: 8
  std_dev_threshold: 0.01
"#;
