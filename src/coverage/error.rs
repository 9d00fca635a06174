use thiserror::Error;

use crate::geometry::RectError;

/// Errors raised by coverage checks before any sweeping happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("Please provide a target")]
    MissingTarget,

    #[error("Invalid target rectangle: {0}")]
    InvalidTarget(RectError),

    #[error("Invalid rectangle at index {index}: {source}")]
    InvalidRectangle { index: usize, source: RectError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Axis;

    #[test]
    fn missing_target_display() {
        assert_eq!(CoverageError::MissingTarget.to_string(), "Please provide a target");
    }

    #[test]
    fn invalid_target_display() {
        let e = CoverageError::InvalidTarget(RectError::NonFinite);
        assert_eq!(e.to_string(), "Invalid target rectangle: Coordinates must be finite");
    }

    #[test]
    fn invalid_rectangle_display_and_source() {
        let e = CoverageError::InvalidRectangle {
            index: 3,
            source: RectError::Inverted { axis: Axis::X },
        };
        assert_eq!(
            e.to_string(),
            "Invalid rectangle at index 3: Inverted x range: start is greater than end"
        );
        let source = std::error::Error::source(&e).map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("Inverted x range: start is greater than end")
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(CoverageError::MissingTarget, CoverageError::MissingTarget);
        assert_ne!(
            CoverageError::MissingTarget,
            CoverageError::InvalidTarget(RectError::NonFinite)
        );
    }
}
