//! Closed interval on the real line.

use std::fmt::Display;

use super::error::{Axis, RectError};

/// Closed range `[start, end]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Creates interval `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    pub const fn new(start: f64, end: f64) -> Self {
        assert!(start <= end, "Interval start must be <= end");
        Self { start, end }
    }

    /// Creates interval `[start, end]`, rejecting NaN/infinite bounds and
    /// inverted ranges. `axis` only labels the error.
    pub fn try_new(start: f64, end: f64, axis: Axis) -> Result<Self, RectError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(RectError::NonFinite);
        }
        if start > end {
            return Err(RectError::Inverted { axis });
        }
        Ok(Self { start, end })
    }

    /// Interval between two points given in either order.
    pub(crate) fn between(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub const fn start(&self) -> f64 {
        self.start
    }

    pub const fn end(&self) -> f64 {
        self.end
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.start, self.end)
    }
}
