use thiserror::Error;

/// Errors raised by the board and the simulation built on it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoardError {
    /// A cell index outside `[0, size)`.
    #[error("cell index {index} out of range for board of {size} cells")]
    IndexOutOfRange { index: usize, size: usize },
    /// A board needs at least one row and one column.
    #[error("board dimensions {rows}x{cols} must both be non-zero")]
    InvalidDimensions { rows: usize, cols: usize },
    /// Random fill density outside `[0, 1]`.
    #[error("random density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
    /// Preset lookup past the end of the preset list.
    #[error("pattern {index} does not exist ({available} available)")]
    PatternIndex { index: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = BoardError::IndexOutOfRange { index: 12, size: 9 };
        assert_eq!(err.to_string(), "cell index 12 out of range for board of 9 cells");

        let err = BoardError::InvalidDimensions { rows: 0, cols: 4 };
        assert!(err.to_string().contains("0x4"));
    }
}
