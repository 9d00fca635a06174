use std::fmt;

use thiserror::Error;

/// Coordinate axis of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Reasons a rectangle or interval is rejected by validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RectError {
    #[error("Coordinates must be finite")]
    NonFinite,

    #[error("Inverted {axis} range: start is greater than end")]
    Inverted { axis: Axis },
}
