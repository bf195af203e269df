//! Trait definitions for buffer operations.
//!
//! The traits are split by concern so each can be implemented and tested
//! independently. All methods are pure: they leave the receiver and any
//! operand untouched and return results as new values.

use crate::error::PcmResult;
use crate::traits::Frame;

/// Time-domain editing operations.
pub trait AudioEditing<F: Frame>: Sized {
    /// The frames in reversed temporal order; channel values within each
    /// frame are unchanged. Applying it twice restores the original.
    fn reverse(&self) -> Self;

    /// Keeps only the frames with index in `[start, end]`, both inclusive.
    ///
    /// # Errors
    /// [`PcmError::Range`](crate::PcmError::Range) when `start > end` or
    /// `end` is not a valid frame index.
    fn trim(&self, start: usize, end: usize) -> PcmResult<Self>;

    /// Removes the frames with index in `[start, end]`, both inclusive,
    /// keeping the surviving frames in their original order.
    ///
    /// # Errors
    /// [`PcmError::Range`](crate::PcmError::Range) when `start > end` or
    /// `end` is not a valid frame index.
    fn cut(&self, start: usize, end: usize) -> PcmResult<Self>;

    /// Appends `other`'s frames after this buffer's frames.
    ///
    /// # Errors
    /// [`PcmError::Format`](crate::PcmError::Format) when the sample rates
    /// differ.
    fn concat(&self, other: &Self) -> PcmResult<Self>;

    /// Sums the two buffers frame by frame, each channel saturating
    /// independently at the sample type's bounds.
    ///
    /// # Errors
    /// [`PcmError::Format`](crate::PcmError::Format) when the sample rates
    /// or frame counts differ.
    fn mix(&self, other: &Self) -> PcmResult<Self>;
}

/// Loudness measurement.
pub trait AudioStatistics<F: Frame> {
    /// Per-channel root-mean-square amplitude over all frames:
    /// `sqrt(sum(sample^2) / frame_count)`, accumulated in `f64`.
    ///
    /// # Errors
    /// [`PcmError::Range`](crate::PcmError::Range) on an empty buffer,
    /// where the statistic is undefined.
    fn rms(&self) -> PcmResult<F::Levels>;
}

/// Amplitude-shaping operations.
pub trait AudioProcessing<F: Frame>: Sized {
    /// Scales every sample by its channel's factor: multiply in `f64`,
    /// round to nearest, saturate to the sample type's range.
    fn gain(&self, factors: F::Levels) -> Self;

    /// Scales each channel so its RMS becomes the target value for that
    /// channel, with the same rounding and saturation as [`gain`](Self::gain).
    ///
    /// A silent channel with a zero target is left untouched.
    ///
    /// # Errors
    /// [`PcmError::Range`](crate::PcmError::Range) on an empty buffer;
    /// [`PcmError::Arithmetic`](crate::PcmError::Arithmetic) when a
    /// channel's current RMS is zero but its target is not.
    fn normalize(&self, target: F::Levels) -> PcmResult<Self>;
}
