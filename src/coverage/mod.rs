//! Full-coverage check of a target rectangle by a set of rectangles.
//!
//! The check runs in four steps:
//!
//! 1. **Clipping**: every candidate is intersected with the target; candidates
//!    with no overlap are dropped and the rest get sequential ids from 1.
//! 2. **Early exit**: a candidate that clips to exactly the target covers it.
//! 3. **Event sweep**: each clipped rectangle emits a start event at `x1` and
//!    an end event at `x2`. The sorted events are swept left to right while an
//!    active set tracks the rectangles crossed by the sweep line.
//! 4. **Vertical coverage**: after each batch of equal-x events, the active
//!    rectangles' y-ranges must jointly span the target's height.
//!
//! # Module Structure
//!
//! - `clip` - clipping and the single-rectangle shortcut
//! - `event` - event construction and ordering
//! - `active` - active-set implementations and the y-coverage scan
//! - `sweep` - the sweep driver
//! - `report` - verdicts and sweep statistics

mod active;
mod clip;
mod config;
mod error;
mod event;
mod report;
mod sweep;


use tracing::{debug, instrument};

use crate::geometry::Rect;

use active::{OrderedActiveSet, ResortActiveSet};
use clip::{clip_all, Clipped};
use event::{build_events, sort_events};
use sweep::sweep;

pub use config::{CoverageConfig, VerticalStrategy};
pub use error::CoverageError;
pub use report::{CoverageReport, SweepStats, Uncovered, Verdict};

/// Returns true iff `rectangles` jointly cover every point of `target`.
///
/// Uses the default [`CoverageConfig`]. An empty `rectangles` slice is never
/// a cover.
///
/// # Errors
///
/// [`CoverageError::MissingTarget`] when `target` is `None`, and the
/// validation errors described on [`CoverageChecker::report`].
pub fn is_fully_covered(target: Option<&Rect>, rectangles: &[Rect]) -> Result<bool, CoverageError> {
    CoverageChecker::new().check(target, rectangles)
}

/// Reusable coverage checker holding a [`CoverageConfig`].
///
/// Every call works on its own local state, so one checker can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageChecker {
    config: CoverageConfig,
}

impl CoverageChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CoverageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoverageConfig {
        &self.config
    }

    /// Like [`CoverageChecker::report`] but only returns the verdict.
    pub fn check(&self, target: Option<&Rect>, rectangles: &[Rect]) -> Result<bool, CoverageError> {
        Ok(self.report(target, rectangles)?.is_covered())
    }

    /// Decides coverage and explains the outcome.
    ///
    /// # Errors
    ///
    /// - [`CoverageError::MissingTarget`] when `target` is `None`, always.
    /// - [`CoverageError::InvalidTarget`] / [`CoverageError::InvalidRectangle`]
    ///   for non-finite or inverted coordinates, unless validation is
    ///   disabled in the config.
    #[instrument(skip_all, fields(candidates = rectangles.len(), strategy = ?self.config.strategy))]
    pub fn report(
        &self,
        target: Option<&Rect>,
        rectangles: &[Rect],
    ) -> Result<CoverageReport, CoverageError> {
        let target = target.ok_or(CoverageError::MissingTarget)?;
        if self.config.validate {
            validate(target, rectangles)?;
        }

        let mut stats = SweepStats {
            candidates: rectangles.len(),
            ..SweepStats::default()
        };

        if rectangles.is_empty() {
            return Ok(CoverageReport {
                verdict: Verdict::Uncovered(Uncovered::NoCandidates),
                stats,
            });
        }

        let clipped = match clip_all(target, rectangles) {
            Clipped::FullCover { index, id } => {
                debug!(index, "single rectangle covers the target");
                stats.clipped = id as usize;
                return Ok(CoverageReport {
                    verdict: Verdict::Covered,
                    stats,
                });
            }
            Clipped::Rects(clipped) => clipped,
        };
        stats.clipped = clipped.len();

        let mut events = build_events(&clipped);
        sort_events(&mut events);

        let verdict = match self.config.strategy {
            VerticalStrategy::Resort => sweep(
                target,
                &clipped,
                &events,
                &mut ResortActiveSet::new(),
                &mut stats,
            ),
            VerticalStrategy::Ordered => sweep(
                target,
                &clipped,
                &events,
                &mut OrderedActiveSet::new(),
                &mut stats,
            ),
        };
        debug!(covered = verdict.is_covered(), ?stats, "coverage decided");

        Ok(CoverageReport { verdict, stats })
    }
}

fn validate(target: &Rect, rectangles: &[Rect]) -> Result<(), CoverageError> {
    target.validate().map_err(CoverageError::InvalidTarget)?;
    for (index, rect) in rectangles.iter().enumerate() {
        rect.validate()
            .map_err(|source| CoverageError::InvalidRectangle { index, source })?;
    }
    Ok(())
}
