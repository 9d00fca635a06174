//! rectcover - Rectangle coverage checks
//!
//! Decides whether a set of axis-aligned rectangles, possibly overlapping and
//! possibly extending past a target rectangle, jointly cover the whole target
//! with no gaps. The check sweeps a vertical line across the x-boundaries of
//! the clipped rectangles and verifies the y-coverage of the active set at
//! every boundary.
//!
//! ```
//! use rectcover::{is_fully_covered, Rect};
//!
//! let target = Rect::new(0.0, 0.0, 5.0, 3.0);
//! let rects = [Rect::new(-1.0, 0.0, 2.5, 3.0), Rect::new(2.4, 0.0, 5.0, 3.0)];
//! assert!(is_fully_covered(Some(&target), &rects).unwrap());
//! ```

pub mod coverage;
pub mod geometry;

pub use coverage::{
    is_fully_covered, CoverageChecker, CoverageConfig, CoverageError, CoverageReport, SweepStats,
    Uncovered, Verdict, VerticalStrategy,
};
pub use geometry::{Axis, Interval, Rect, RectError};

/// Identifier assigned to each clipped rectangle, in input order, starting at 1.
pub type RectId = u32;
