//! The owning buffer representation.
//!
//! [`AudioBuffer`] pairs an ordered frame sequence with the sample rate it
//! was captured at. It is a plain value type: buffers are cloned or moved
//! whole, every transform allocates and returns a new buffer, and no
//! operation mutates its receiver or operands. Moving a buffer leaves
//! nothing behind to clean up and no partially-aliased state.

use crate::error::{PcmError, PcmResult};
use crate::traits::{Frame, PcmSample};
use serde::{Deserialize, Serialize};

/// An in-memory PCM clip: an ordered frame sequence plus its sample rate.
///
/// The frame format `F` fixes the channel count and sample width at the
/// type level, so two buffers of the same `F` always agree on layout. The
/// insertion order of `frames` is the temporal playback order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioBuffer<F: Frame> {
    frames: Vec<F>,
    sample_rate: u32,
}

impl<F: Frame> AudioBuffer<F> {
    /// Wraps an existing frame sequence with its sample rate.
    ///
    /// # Errors
    /// Returns [`PcmError::Format`] if `sample_rate` is zero.
    pub fn new(frames: Vec<F>, sample_rate: u32) -> PcmResult<Self> {
        if sample_rate == 0 {
            return Err(PcmError::Format(
                "sample rate must be a positive number of Hz".to_string(),
            ));
        }
        Ok(Self {
            frames,
            sample_rate,
        })
    }

    /// A buffer of `num_frames` zero-valued frames.
    ///
    /// # Errors
    /// Returns [`PcmError::Format`] if `sample_rate` is zero.
    pub fn silence(num_frames: usize, sample_rate: u32) -> PcmResult<Self> {
        Self::new(vec![F::default(); num_frames], sample_rate)
    }

    /// The frames in temporal playback order.
    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    /// Consumes the buffer, returning its frames.
    pub fn into_frames(self) -> Vec<F> {
        self.frames
    }

    /// Number of frames held.
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// True when the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels (1 or 2), fixed by the frame format.
    pub fn channels(&self) -> usize {
        F::CHANNELS
    }

    /// Bits per sample on each channel.
    pub fn bits_per_sample(&self) -> u8 {
        F::Sample::BITS
    }

    /// Playback duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frames.len() as f64 / f64::from(self.sample_rate)
    }

    /// A sibling buffer carrying `frames` at this buffer's sample rate.
    pub(crate) fn with_frames(&self, frames: Vec<F>) -> Self {
        Self {
            frames,
            sample_rate: self.sample_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_sample_rate() {
        let result = AudioBuffer::<i16>::new(vec![1, 2, 3], 0);
        assert!(matches!(result, Err(PcmError::Format(_))));
    }

    #[test]
    fn silence_is_zero_valued() {
        let buffer = AudioBuffer::<(i16, i16)>::silence(3, 8_000).unwrap();
        assert_eq!(buffer.num_frames(), 3);
        assert!(buffer.frames().iter().all(|frame| *frame == (0, 0)));
    }

    #[test]
    fn metadata_reflects_frame_format() {
        let mono = AudioBuffer::<i8>::new(vec![1, 2], 8_000).unwrap();
        assert_eq!(mono.channels(), 1);
        assert_eq!(mono.bits_per_sample(), 8);

        let stereo = AudioBuffer::<(i16, i16)>::new(vec![(1, 2)], 44_100).unwrap();
        assert_eq!(stereo.channels(), 2);
        assert_eq!(stereo.bits_per_sample(), 16);
    }

    #[test]
    fn duration_follows_sample_rate() {
        let buffer = AudioBuffer::<i16>::silence(44_100, 44_100).unwrap();
        assert!((buffer.duration_seconds() - 1.0).abs() < f64::EPSILON);
    }
}
