//! Error types and result utilities for PCM buffer operations.

use thiserror::Error;

/// Convenience type alias for results that may contain PcmError
pub type PcmResult<T> = Result<T, PcmError>;

/// Error types that can occur during PCM buffer operations.
///
/// Every fallible operation in the crate reports one of these variants;
/// out-of-range arithmetic never panics or wraps, it either saturates (where
/// the operation defines saturation) or surfaces here.
#[derive(Error, Debug)]
pub enum PcmError {
    /// A source file could not be read, or a destination could not be
    /// created or written. No partial buffer is produced.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raw data whose length is not a whole number of frames, a zero sample
    /// rate, or operands of a binary operation whose layouts disagree.
    #[error("format error: {0}")]
    Format(String),

    /// An inverted or out-of-bounds frame index range, or a statistic that
    /// is undefined over an empty buffer.
    #[error("range error: {0}")]
    Range(String),

    /// A scale factor that cannot be computed, such as normalizing a silent
    /// channel to a nonzero loudness.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}
