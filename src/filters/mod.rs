//! Signal smoothing filters for the gesture control channels.
//!
//! Each logical channel (right cursor, left cursor, lock, zoom) owns one
//! filter instance exclusively. Filters are first-order recurrences, so
//! samples must be fed in arrival order.

/// Exponential scalar smoother with an output dead-zone
pub mod scalar;

/// Velocity-adaptive 2D smoother for cursor positions
pub mod adaptive;

pub use adaptive::{AdaptiveSmoother, AdaptiveSmootherParams};
pub use scalar::ScalarSmoother;

/// Trait for all channel smoothers
pub trait Smoother: Send {
    /// Sample type consumed and produced by the filter
    type Value: Copy;

    /// Feed one sample and return the smoothed output
    fn update(&mut self, target: Self::Value) -> Self::Value;

    /// Return to the uninitialized state; the next sample passes through unchanged
    fn reset(&mut self);

    /// True once the filter has seen a sample since construction or reset
    fn is_initialized(&self) -> bool;

    /// Get filter name
    fn name(&self) -> &str;
}
