//! Sweep driver: walks the sorted events left to right.

use tracing::{debug, trace};

use super::active::ActiveSet;
use super::clip::ClippedRect;
use super::event::{Event, EventKind};
use super::report::{SweepStats, Uncovered, Verdict};
use crate::geometry::{Interval, Rect};

/// Sweeps `events` (sorted by [`super::event::sort_events`]) over `target`.
///
/// 1. The first event must sit on the target's left edge.
/// 2. Events sharing an x-coordinate are applied as one batch; after each
///    batch the active y-ranges must cover the target's full height.
/// 3. The last event must sit on the target's right edge. Clipping bounds
///    every x2 by the target, so this means coverage reaches all the way.
///
/// An event whose slot is out of range for `clipped` changes nothing.
pub fn sweep<A: ActiveSet>(
    target: &Rect,
    clipped: &[ClippedRect],
    events: &[Event],
    active: &mut A,
    stats: &mut SweepStats,
) -> Verdict {
    let Some((last, body)) = events.split_last() else {
        debug!("no candidate overlaps the target");
        return Verdict::Uncovered(Uncovered::NoOverlap);
    };

    let first_x = events[0].x;
    if first_x != target.x1 {
        debug!(first_x, left = target.x1, "uncovered strip at the left edge");
        return Verdict::Uncovered(Uncovered::LeftEdge { first_x });
    }

    let span = Interval::between(target.y1, target.y2);

    for (event, next) in body.iter().zip(&events[1..]) {
        stats.events += 1;

        if let Some(rect) = clipped.get(event.slot) {
            match event.kind {
                EventKind::Start => active.activate(rect),
                EventKind::End => active.deactivate(rect),
            }
        } else {
            debug!(slot = event.slot, "event refers to no clipped rectangle");
        }

        if next.x == event.x {
            continue;
        }

        stats.boundaries_checked += 1;
        stats.max_active = stats.max_active.max(active.len());
        trace!(x = event.x, active = active.len(), "checking vertical coverage");

        if let Some(gap) = active.first_gap(span) {
            debug!(x = event.x, %gap, "uncovered y-gap");
            return Verdict::Uncovered(Uncovered::Strip { x: event.x, gap });
        }
    }

    stats.events += 1;
    if last.x == target.x2 {
        Verdict::Covered
    } else {
        debug!(last_x = last.x, right = target.x2, "uncovered strip at the right edge");
        Verdict::Uncovered(Uncovered::RightEdge { last_x: last.x })
    }
}
