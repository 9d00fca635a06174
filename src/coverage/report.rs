//! Verdict and sweep statistics returned by [`super::CoverageChecker::report`].

use std::fmt;

use crate::geometry::Interval;

/// Why the target is not covered.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Uncovered {
    /// The candidate list was empty.
    NoCandidates,
    /// Every candidate lies entirely outside the target.
    NoOverlap,
    /// Nothing starts at the target's left edge; the first boundary is `first_x`.
    LeftEdge { first_x: f64 },
    /// Coverage stops at `last_x`, short of the target's right edge.
    RightEdge { last_x: f64 },
    /// Right of boundary `x`, the active rectangles leave `gap` uncovered in y.
    Strip { x: f64, gap: Interval },
}

impl fmt::Display for Uncovered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uncovered::NoCandidates => write!(f, "no candidate rectangles"),
            Uncovered::NoOverlap => write!(f, "no candidate overlaps the target"),
            Uncovered::LeftEdge { first_x } => {
                write!(f, "coverage starts at x = {:.3}, after the left edge", first_x)
            }
            Uncovered::RightEdge { last_x } => {
                write!(f, "coverage stops at x = {:.3}, before the right edge", last_x)
            }
            Uncovered::Strip { x, gap } => write!(f, "y-gap {} right of x = {:.3}", gap, x),
        }
    }
}

/// Final answer of a coverage check.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Covered,
    Uncovered(Uncovered),
}

impl Verdict {
    pub fn is_covered(&self) -> bool {
        matches!(self, Verdict::Covered)
    }
}

/// Counters gathered while checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepStats {
    /// Rectangles handed to the check.
    pub candidates: usize,
    /// Rectangles that overlapped the target and entered the sweep.
    pub clipped: usize,
    /// Events processed before the verdict was reached.
    pub events: usize,
    /// Distinct x-boundaries at which vertical coverage was checked.
    pub boundaries_checked: usize,
    /// Largest active set seen at a checked boundary.
    pub max_active: usize,
}

/// Verdict plus the statistics of the sweep that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageReport {
    pub verdict: Verdict,
    pub stats: SweepStats,
}

impl CoverageReport {
    pub fn is_covered(&self) -> bool {
        self.verdict.is_covered()
    }
}
