use super::Smoother;
use crate::constants::{
    DEFAULT_CURSOR_DEAD_ZONE, DEFAULT_CURSOR_MAX_ALPHA, DEFAULT_CURSOR_MAX_DELTA, DEFAULT_CURSOR_MIN_ALPHA,
    DEFAULT_CURSOR_VELOCITY_THRESHOLD,
};
use crate::landmarks::Point2;
use serde::{Deserialize, Serialize};

/// Tuning for [`AdaptiveSmoother`]
///
/// The values are empirically tuned "feel" parameters rather than
/// correctness constraints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveSmootherParams {
    /// Movements shorter than this are treated as tremor and ignored
    pub dead_zone: f64,
    /// Blend factor used for slow motion
    pub min_alpha: f64,
    /// Blend factor used for fast motion
    pub max_alpha: f64,
    /// Per-frame distance at which the filter reaches `max_alpha`
    pub velocity_threshold: f64,
    /// Largest per-axis step applied in one frame
    pub max_delta: f64,
    /// Apply a quadratic ease to the velocity factor
    pub ease: bool,
}

impl Default for AdaptiveSmootherParams {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_CURSOR_DEAD_ZONE,
            min_alpha: DEFAULT_CURSOR_MIN_ALPHA,
            max_alpha: DEFAULT_CURSOR_MAX_ALPHA,
            velocity_threshold: DEFAULT_CURSOR_VELOCITY_THRESHOLD,
            max_delta: DEFAULT_CURSOR_MAX_DELTA,
            ease: true,
        }
    }
}

impl AdaptiveSmootherParams {
    /// Check that the parameters describe a usable filter
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid parameter
    pub fn check(&self) -> std::result::Result<(), String> {
        if !(self.min_alpha > 0.0 && self.min_alpha <= 1.0) || !(self.max_alpha > 0.0 && self.max_alpha <= 1.0) {
            return Err("Alpha must be in (0, 1]".to_string());
        }
        if self.min_alpha > self.max_alpha {
            return Err("Minimum alpha must not exceed maximum alpha".to_string());
        }
        if self.velocity_threshold <= 0.0 {
            return Err("Velocity threshold must be positive".to_string());
        }
        if self.max_delta <= 0.0 {
            return Err("Max delta must be positive".to_string());
        }
        if self.dead_zone < 0.0 {
            return Err("Dead zone must be non-negative".to_string());
        }
        Ok(())
    }
}

/// Velocity-adaptive exponential smoother for 2D positions
///
/// Slow motion is heavily smoothed, fast motion is tracked closely, and a
/// single-frame jump can move the output at most `max_delta * max_alpha`
/// per axis.
#[derive(Debug, Clone)]
pub struct AdaptiveSmoother {
    params: AdaptiveSmootherParams,
    state: Option<Point2>,
}

impl AdaptiveSmoother {
    /// Create a new adaptive smoother
    ///
    /// # Panics
    ///
    /// Panics if the parameters fail [`AdaptiveSmootherParams::check`]
    #[must_use]
    pub fn new(params: AdaptiveSmootherParams) -> Self {
        if let Err(msg) = params.check() {
            panic!("{msg}");
        }
        Self { params, state: None }
    }

    /// Current smoothed position, if initialized
    #[must_use]
    pub const fn position(&self) -> Option<Point2> {
        self.state
    }

    /// Filter parameters
    #[must_use]
    pub const fn params(&self) -> &AdaptiveSmootherParams {
        &self.params
    }

    /// Upper bound on the per-axis output displacement of a single update
    #[must_use]
    pub fn max_step(&self) -> f64 {
        self.params.max_delta * self.params.max_alpha
    }

    fn blend_factor(&self, dist: f64) -> f64 {
        let p = &self.params;
        let mut f = (dist / p.velocity_threshold).clamp(0.0, 1.0);
        if p.ease {
            f *= f;
        }
        (p.max_alpha - p.min_alpha).mul_add(f, p.min_alpha)
    }
}

impl Default for AdaptiveSmoother {
    fn default() -> Self {
        Self::new(AdaptiveSmootherParams::default())
    }
}

impl Smoother for AdaptiveSmoother {
    type Value = Point2;

    fn update(&mut self, target: Point2) -> Point2 {
        let Some(current) = self.state else {
            self.state = Some(target);
            return target;
        };

        let dx = target.x - current.x;
        let dy = target.y - current.y;
        let dist = dx.hypot(dy);

        if dist < self.params.dead_zone {
            return current;
        }

        let alpha = self.blend_factor(dist);
        let max_delta = self.params.max_delta;
        let next = Point2::new(
            dx.clamp(-max_delta, max_delta).mul_add(alpha, current.x),
            dy.clamp(-max_delta, max_delta).mul_add(alpha, current.y),
        );

        self.state = Some(next);
        next
    }

    fn reset(&mut self) {
        self.state = None;
    }

    fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    fn name(&self) -> &str {
        "AdaptiveSmoother"
    }
}
