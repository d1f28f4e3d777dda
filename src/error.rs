//! Error types and result utilities for sample buffer operations.

use thiserror::Error;

/// Convenience type alias for results that may contain a [`BufferError`].
pub type BufferResult<T> = Result<T, BufferError>;

/// Error types that can occur during sample buffer operations.
///
/// Arithmetic overflow is deliberately absent: positive overflow saturates and
/// negative overflow wraps, neither is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Two operands that must be frame-aligned have different lengths.
    ///
    /// Raised by `add` and by `ranged_add` when its two windows differ in width.
    #[error("Length mismatch: left operand has {left} frames, right operand has {right}")]
    LengthMismatch {
        /// Frames in the left-hand operand (or window).
        left: usize,
        /// Frames in the right-hand operand (or window).
        right: usize,
    },

    /// A frame or channel index lies outside the buffer.
    #[error("Index out of range: index {index} is not below length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length it was checked against.
        len: usize,
    },

    /// An inclusive range whose start lies after its end.
    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRange {
        /// First index of the range.
        start: usize,
        /// Last index of the range.
        end: usize,
    },

    /// Normalisation was asked to divide by a zero RMS level.
    #[error("Division by zero: current RMS of channel {channel} is zero")]
    DivisionByZero {
        /// Channel whose RMS component was zero.
        channel: usize,
    },

    /// A statistic that is undefined for zero frames was requested.
    #[error("Empty buffer: {0} is undefined for a buffer with no frames")]
    EmptyBuffer(&'static str),

    /// Channel data did not match the buffer's channel layout.
    #[error("Channel mismatch: expected {expected} channels, found {found}")]
    ChannelMismatch {
        /// Channels required by the layout.
        expected: usize,
        /// Channels actually supplied.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_values() {
        let err = BufferError::LengthMismatch { left: 3, right: 4 };
        assert_eq!(
            err.to_string(),
            "Length mismatch: left operand has 3 frames, right operand has 4"
        );

        let err = BufferError::DivisionByZero { channel: 1 };
        assert!(err.to_string().contains("channel 1"));
    }
}
