//! Error types for universe construction and configuration.

use thiserror::Error;

/// Grid axis named in dimension errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Errors raised while building a universe or parsing its configuration.
///
/// Nothing after construction can fail: `tick` and `render` are total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A dimension was zero.
    #[error("{axis} must be positive")]
    ZeroDimension {
        /// Offending axis.
        axis: Axis,
    },

    /// The cell count does not fit in memory addressing.
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A text row did not match the width of the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// Text input contained no rows.
    #[error("pattern text is empty")]
    EmptyPattern,

    /// Text input contained a character that is not a cell glyph.
    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The character found.
        glyph: char,
    },

    /// A command-line flag was given without its value.
    #[error("missing value for {flag}")]
    MissingValue {
        /// The flag.
        flag: String,
    },

    /// A command-line flag value could not be parsed or is out of range.
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue {
        /// The flag.
        flag: String,
        /// The rejected value.
        value: String,
    },

    /// A command-line argument was not recognised.
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigurationError::ZeroDimension { axis: Axis::Height };
        assert_eq!(err.to_string(), "height must be positive");

        let err = ConfigurationError::RaggedRow { row: 2, expected: 5, found: 4 };
        assert_eq!(err.to_string(), "row 2 has 4 cells, expected 5");

        let err = ConfigurationError::UnknownArgument("--nope".into());
        assert_eq!(err.to_string(), "unknown argument: --nope");
    }
}
