use super::Smoother;
use crate::constants::{DEFAULT_ZOOM_ALPHA, DEFAULT_ZOOM_DEAD_ZONE};

/// Exponential smoothing filter for one-dimensional signals
///
/// The internal state follows `state += (target - state) * alpha`. The
/// reported value only moves once the state has drifted more than
/// `dead_zone` away from the last reported value.
#[derive(Debug, Clone)]
pub struct ScalarSmoother {
    alpha: f64,
    dead_zone: f64,
    state: Option<f64>,
    last_output: f64,
}

impl ScalarSmoother {
    /// Create a new scalar smoother
    ///
    /// # Panics
    ///
    /// Panics if alpha is not in the range (0, 1] or the dead-zone is negative
    #[must_use]
    pub fn new(alpha: f64, dead_zone: f64) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        assert!(dead_zone >= 0.0, "Dead zone must be non-negative");
        Self {
            alpha,
            dead_zone,
            state: None,
            last_output: 0.0,
        }
    }

    /// Feed one sample using a caller-supplied blend factor
    ///
    /// An out-of-range alpha is clamped to `[0, 1]`.
    pub fn update_with_alpha(&mut self, target: f64, alpha: f64) -> f64 {
        let alpha = alpha.clamp(0.0, 1.0);
        match self.state {
            None => {
                self.state = Some(target);
                self.last_output = target;
            }
            Some(state) => {
                let next = alpha.mul_add(target - state, state);
                self.state = Some(next);
                if (next - self.last_output).abs() > self.dead_zone {
                    self.last_output = next;
                }
            }
        }
        self.last_output
    }

    /// Filtered state before the dead-zone is applied
    #[must_use]
    pub const fn raw_state(&self) -> Option<f64> {
        self.state
    }

    /// Last reported value, if initialized
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self.state {
            Some(_) => Some(self.last_output),
            None => None,
        }
    }

    /// Configured blend factor
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for ScalarSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM_ALPHA, DEFAULT_ZOOM_DEAD_ZONE)
    }
}

impl Smoother for ScalarSmoother {
    type Value = f64;

    fn update(&mut self, target: f64) -> f64 {
        self.update_with_alpha(target, self.alpha)
    }

    fn reset(&mut self) {
        self.state = None;
        self.last_output = 0.0;
    }

    fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    fn name(&self) -> &str {
        "ScalarSmoother"
    }
}
