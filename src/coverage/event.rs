//! Sweep events: where a clipped rectangle's x-range begins and ends.

use std::cmp::Ordering;

use super::clip::ClippedRect;

/// Whether an event adds its rectangle to the active set or removes it.
///
/// The derived order puts `Start` before `End`, which is the tie-break for
/// events sharing an x-coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKind {
    Start,
    End,
}

/// A point on the sweep line referring to one clipped rectangle by position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub x: f64,
    /// Index into the clipped rectangle slice the events were built from.
    pub slot: usize,
    pub kind: EventKind,
}

/// Emits a start event at `x1` and an end event at `x2` for every rectangle.
pub fn build_events(clipped: &[ClippedRect]) -> Vec<Event> {
    let mut events = Vec::with_capacity(clipped.len() * 2);
    for (slot, c) in clipped.iter().enumerate() {
        events.push(Event {
            x: c.rect.x1,
            slot,
            kind: EventKind::Start,
        });
        events.push(Event {
            x: c.rect.x2,
            slot,
            kind: EventKind::End,
        });
    }
    events
}

/// Total order on sweep positions in which `-0.0` and `0.0` coincide.
fn position_cmp(a: f64, b: f64) -> Ordering {
    let canonical = |v: f64| if v == 0.0 { 0.0 } else { v };
    canonical(a).total_cmp(&canonical(b))
}

/// Sorts by x ascending, starts before ends on ties.
///
/// Ends-after-starts keeps a zero-width rectangle from staying active once
/// its own x has been processed. Any other tie order between different
/// rectangles is irrelevant because the sweep batches equal x values.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| position_cmp(a.x, b.x).then(a.kind.cmp(&b.kind)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn clipped(id: u32, x1: f64, x2: f64) -> ClippedRect {
        ClippedRect {
            id,
            rect: Rect::new(x1, 0.0, x2, 1.0),
        }
    }

    #[test]
    fn two_events_per_rectangle() {
        let rects = [clipped(1, 0.0, 2.0), clipped(2, 1.0, 3.0)];
        let events = build_events(&rects);
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], Event { x: 0.0, slot: 0, kind: EventKind::Start });
        assert_eq!(events[1], Event { x: 2.0, slot: 0, kind: EventKind::End });
        assert_eq!(events[2].kind, EventKind::Start);
        assert_eq!(events[3].kind, EventKind::End);
    }

    #[test]
    fn sorted_by_x() {
        let rects = [clipped(1, 2.0, 5.0), clipped(2, 0.0, 2.5)];
        let mut events = build_events(&rects);
        sort_events(&mut events);
        let xs: Vec<f64> = events.iter().map(|e| e.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 2.5, 5.0]);
    }

    #[test]
    fn ties_put_starts_first() {
        let rects = [clipped(1, 0.0, 2.0), clipped(2, 2.0, 2.0), clipped(3, 2.0, 4.0)];
        let mut events = build_events(&rects);
        sort_events(&mut events);
        let at_two: Vec<EventKind> = events
            .iter()
            .filter(|e| e.x == 2.0)
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            at_two,
            vec![EventKind::Start, EventKind::Start, EventKind::End, EventKind::End]
        );
    }

    #[test]
    fn signed_zeros_compare_equal() {
        let rects = [clipped(1, 0.0, -0.0), clipped(2, -0.0, 1.0)];
        let mut events = build_events(&rects);
        sort_events(&mut events);
        let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Start, EventKind::Start, EventKind::End, EventKind::End]
        );
        assert_eq!(events[2].slot, 0);
    }
}
