//! Evenly sampled coordinate axes.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when an axis cannot be sampled.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AxisError {
    /// Fewer than two samples requested
    #[error("axis needs at least 2 steps, got {0}")]
    TooFewSteps(usize),

    /// Non-finite endpoint
    #[error("axis endpoints must be finite (start={start}, end={end})")]
    NonFinite { start: f64, end: f64 },
}

/// One coordinate axis: `step_count` samples spread evenly from `start` to
/// `end`, both endpoints included.
///
/// Samples are computed by linear interpolation rather than by repeatedly
/// adding a fixed step, so the last spacing may differ from
/// [`resolution`](Self::resolution) by floating-point rounding. The axis may
/// run in either direction.
///
/// # Example
///
/// ```
/// use cvm_grid::types::AxisSpec;
///
/// let lat = AxisSpec::new(31.0, 36.0, 2).unwrap();
/// assert_eq!(lat.values(), vec![31.0, 36.0]);
///
/// let elev = AxisSpec::new(4000.0, -15000.0, 20).unwrap();
/// assert_eq!(elev.value(0), 4000.0);
/// assert_eq!(elev.value(19), -15000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// First sample value
    pub start: f64,
    /// Last sample value
    pub end: f64,
    /// Number of samples (at least 2)
    #[serde(rename = "steps")]
    pub step_count: usize,
}

impl AxisSpec {
    /// Create a validated axis.
    pub fn new(start: f64, end: f64, step_count: usize) -> Result<Self, AxisError> {
        let axis = Self {
            start,
            end,
            step_count,
        };
        axis.validate()?;
        Ok(axis)
    }

    /// Check the sampling invariants.
    pub fn validate(&self) -> Result<(), AxisError> {
        if self.step_count < 2 {
            return Err(AxisError::TooFewSteps(self.step_count));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(AxisError::NonFinite {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.step_count
    }

    /// Always false for a validated axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.step_count == 0
    }

    /// Sample value at position `i`.
    ///
    /// The last sample is pinned to `end` exactly.
    #[inline]
    pub fn value(&self, i: usize) -> f64 {
        let last = self.step_count.saturating_sub(1);
        if i == last {
            return self.end;
        }
        let step = (self.end - self.start) / last as f64;
        self.start + i as f64 * step
    }

    /// All sample values in order.
    pub fn values(&self) -> Vec<f64> {
        (0..self.step_count).map(|i| self.value(i)).collect()
    }

    /// Spacing between the first two samples.
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.value(1) - self.value(0)
    }

    /// Smallest sample value.
    #[inline]
    pub fn min(&self) -> f64 {
        self.start.min(self.end)
    }

    /// Largest sample value.
    #[inline]
    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }
}

impl fmt::Display for AxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} ({} steps)", self.start, self.end, self.step_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_inclusive() {
        let axis = AxisSpec::new(-121.0, -113.0, 3).unwrap();
        assert_eq!(axis.values(), vec![-121.0, -117.0, -113.0]);
    }

    #[test]
    fn test_descending_axis() {
        let axis = AxisSpec::new(4000.0, -15000.0, 191).unwrap();
        assert_eq!(axis.value(0), 4000.0);
        assert_eq!(axis.value(190), -15000.0);
        assert!((axis.resolution() + 100.0).abs() < 1e-9);
        assert_eq!(axis.min(), -15000.0);
        assert_eq!(axis.max(), 4000.0);
    }

    #[test]
    fn test_rejects_single_step() {
        assert_eq!(AxisSpec::new(0.0, 1.0, 1), Err(AxisError::TooFewSteps(1)));
        assert!(AxisSpec::new(f64::NAN, 1.0, 4).is_err());
    }

    #[test]
    fn test_interpolated_not_accumulated() {
        let axis = AxisSpec::new(30.956, 36.613, 283).unwrap();
        let values = axis.values();
        assert_eq!(values.len(), 283);
        assert_eq!(*values.last().unwrap(), 36.613);
        let mid = 30.956 + 141.0 * (36.613 - 30.956) / 282.0;
        assert!((values[141] - mid).abs() < 1e-12);
    }
}
