//! Axis-aligned rectangle value type.

use super::error::{Axis, RectError};
use super::interval::Interval;
use crate::coverage::CoverageError;

/// Axis-aligned rectangle `[x1, x2] × [y1, y2]`.
///
/// Expected to satisfy `x1 <= x2` and `y1 <= y2`. The fields are public, so
/// the invariant is only enforced by [`Rect::try_new`] and [`Rect::validate`];
/// coverage checks validate their inputs unless told otherwise.
/// Degenerate rectangles (a line or a point) are allowed and have no area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a rectangle, rejecting non-finite or inverted coordinates.
    pub fn try_new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, RectError> {
        let rect = Self::new(x1, y1, x2, y2);
        rect.validate()?;
        Ok(rect)
    }

    /// Checks that all coordinates are finite and both ranges are ordered.
    pub fn validate(&self) -> Result<(), RectError> {
        self.x_span()?;
        self.y_span()?;
        Ok(())
    }

    pub fn x_span(&self) -> Result<Interval, RectError> {
        Interval::try_new(self.x1, self.x2, Axis::X)
    }

    pub fn y_span(&self) -> Result<Interval, RectError> {
        Interval::try_new(self.y1, self.y2, Axis::Y)
    }

    /// Returns true if this rectangle shares no point with `target`.
    /// Touching edges count as sharing.
    pub fn is_outside(&self, target: &Rect) -> bool {
        self.x1 > target.x2 || self.x2 < target.x1 || self.y1 > target.y2 || self.y2 < target.y1
    }

    /// Intersection with `target`, or `None` if the two are disjoint.
    ///
    /// A rectangle that only touches `target` clips to a degenerate one.
    pub fn clip_to(&self, target: &Rect) -> Option<Rect> {
        if self.is_outside(target) {
            return None;
        }
        Some(Rect {
            x1: self.x1.max(target.x1),
            y1: self.y1.max(target.y1),
            x2: self.x2.min(target.x2),
            y2: self.y2.min(target.y2),
        })
    }

    /// Returns true if `rects` jointly cover this rectangle.
    ///
    /// Shorthand for [`crate::is_fully_covered`] with `self` as the target.
    pub fn is_covered_by(&self, rects: &[Rect]) -> Result<bool, CoverageError> {
        crate::coverage::is_fully_covered(Some(self), rects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: Rect = Rect::new(0.0, 0.0, 5.0, 3.0);

    #[test]
    fn test_try_new_rejects_inverted() {
        assert_eq!(
            Rect::try_new(3.0, 0.0, 1.0, 1.0),
            Err(RectError::Inverted { axis: Axis::X })
        );
        assert_eq!(
            Rect::try_new(0.0, 2.0, 1.0, 1.0),
            Err(RectError::Inverted { axis: Axis::Y })
        );
        assert_eq!(Rect::try_new(0.0, f64::NAN, 1.0, 1.0), Err(RectError::NonFinite));
        assert!(Rect::try_new(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_spans() {
        assert_eq!(TARGET.x_span(), Ok(Interval::new(0.0, 5.0)));
        assert_eq!(TARGET.y_span(), Ok(Interval::new(0.0, 3.0)));
    }

    #[test]
    fn test_is_outside() {
        assert!(Rect::new(6.0, 0.0, 7.0, 3.0).is_outside(&TARGET));
        assert!(Rect::new(-2.0, 0.0, -1.0, 3.0).is_outside(&TARGET));
        assert!(Rect::new(0.0, 3.5, 5.0, 4.0).is_outside(&TARGET));
        assert!(Rect::new(0.0, -4.0, 5.0, -0.5).is_outside(&TARGET));
        assert!(!Rect::new(5.0, 0.0, 6.0, 3.0).is_outside(&TARGET));
        assert!(!Rect::new(1.0, 1.0, 2.0, 2.0).is_outside(&TARGET));
    }

    #[test]
    fn test_clip_to() {
        let clipped = Rect::new(-1.0, -1.0, 2.5, 10.0).clip_to(&TARGET);
        assert_eq!(clipped, Some(Rect::new(0.0, 0.0, 2.5, 3.0)));

        let inside = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert_eq!(inside.clip_to(&TARGET), Some(inside));

        assert_eq!(Rect::new(6.0, 0.0, 7.0, 3.0).clip_to(&TARGET), None);
    }

    #[test]
    fn test_clip_to_touching_edge_is_degenerate() {
        let clipped = Rect::new(5.0, 0.0, 8.0, 3.0).clip_to(&TARGET).unwrap();
        assert_eq!(clipped, Rect::new(5.0, 0.0, 5.0, 3.0));
    }

    #[test]
    fn test_is_covered_by() {
        assert_eq!(TARGET.is_covered_by(&[TARGET]), Ok(true));
        assert_eq!(TARGET.is_covered_by(&[]), Ok(false));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&TARGET).unwrap();
        assert_eq!(json, r#"{"x1":0.0,"y1":0.0,"x2":5.0,"y2":3.0}"#);
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TARGET);
    }
}
