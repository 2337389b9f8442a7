//! Constants used throughout the pipeline

/// Number of landmarks reported per hand
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Hand landmark indices (anatomical convention of the upstream detector)
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// (tip, pip, mcp) triples for the four non-thumb fingers
pub const FINGER_CHAINS: [(usize, usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP, INDEX_MCP),
    (MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP),
    (RING_TIP, RING_PIP, RING_MCP),
    (PINKY_TIP, PINKY_PIP, PINKY_MCP),
];

/// Fingertips checked by the fist heuristic
pub const NON_THUMB_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Knuckles used as the hand-size reference
pub const DEPTH_REFERENCE_KNUCKLES: [usize; 2] = [INDEX_MCP, PINKY_MCP];

/// Highest finger count the classifier can report
pub const MAX_FINGER_COUNT: u8 = 5;

/// Default adaptive cursor smoothing parameters
pub const DEFAULT_CURSOR_DEAD_ZONE: f64 = 0.005;
pub const DEFAULT_CURSOR_MIN_ALPHA: f64 = 0.04;
pub const DEFAULT_CURSOR_MAX_ALPHA: f64 = 0.38;
pub const DEFAULT_CURSOR_VELOCITY_THRESHOLD: f64 = 0.12;
pub const DEFAULT_CURSOR_MAX_DELTA: f64 = 0.15;

/// Default scalar smoothing parameters
pub const DEFAULT_ZOOM_ALPHA: f64 = 0.1;
pub const DEFAULT_ZOOM_DEAD_ZONE: f64 = 0.003;
pub const DEFAULT_LOCK_ALPHA: f64 = 0.2;
pub const DEFAULT_LOCK_DEAD_ZONE: f64 = 0.002;

/// Horizontal thumb-tip to index-base distance that counts as an extended thumb
pub const DEFAULT_THUMB_THRESHOLD: f64 = 0.12;

/// Finger-count stabilization buffer
pub const DEFAULT_STABILIZER_CAPACITY: usize = 28;
pub const DEFAULT_STABILIZER_MIN_SAMPLES: usize = 10;
pub const DEFAULT_STABILIZER_MAJORITY: f64 = 0.8;

/// Hand-size calibration window (wrist to knuckle distance, image heights)
pub const DEFAULT_DEPTH_FAR: f64 = 0.04;
pub const DEFAULT_DEPTH_NEAR: f64 = 0.46;
pub const DEFAULT_DEPTH_EXPONENT: f64 = 1.25;

/// Lock gesture thresholds
pub const DEFAULT_PINCH_THRESHOLD: f64 = 0.06;
pub const DEFAULT_FIST_RADIUS: f64 = 0.18;
pub const DEFAULT_LOCK_THRESHOLD: f64 = 0.5;

/// Motion status detection
pub const DEFAULT_MOTION_WINDOW: usize = 8;
pub const DEFAULT_MOTION_THRESHOLD: f64 = 0.01;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
