//! Axis-aligned geometry primitives: closed intervals and rectangles.

mod error;
mod interval;
mod rect;

pub use error::{Axis, RectError};
pub use interval::Interval;
pub use rect::Rect;
