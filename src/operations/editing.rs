//! Time-domain editing operations for [`AudioBuffer`].
//!
//! Binary operations validate operand compatibility before touching any
//! frame data; a failed validation produces no partial result.

use super::traits::AudioEditing;
use crate::error::{PcmError, PcmResult};
use crate::repr::AudioBuffer;
use crate::traits::{Frame, PcmSample};

/// Validates an inclusive frame index range against a buffer length.
fn check_range(start: usize, end: usize, num_frames: usize) -> PcmResult<()> {
    if start > end {
        return Err(PcmError::Range(format!(
            "inverted range: start {start} is past end {end}"
        )));
    }
    if end >= num_frames {
        return Err(PcmError::Range(format!(
            "range end {end} is outside the buffer ({num_frames} frames)"
        )));
    }
    Ok(())
}

/// Validates that two operands of a binary operation agree on sample rate.
fn check_rates<F: Frame>(a: &AudioBuffer<F>, b: &AudioBuffer<F>) -> PcmResult<()> {
    if a.sample_rate() != b.sample_rate() {
        return Err(PcmError::Format(format!(
            "sample rate mismatch: {} Hz vs {} Hz",
            a.sample_rate(),
            b.sample_rate()
        )));
    }
    Ok(())
}

impl<F: Frame> AudioEditing<F> for AudioBuffer<F> {
    fn reverse(&self) -> Self {
        let mut frames = self.frames().to_vec();
        frames.reverse();
        self.with_frames(frames)
    }

    fn trim(&self, start: usize, end: usize) -> PcmResult<Self> {
        check_range(start, end, self.num_frames())?;
        Ok(self.with_frames(self.frames()[start..=end].to_vec()))
    }

    fn cut(&self, start: usize, end: usize) -> PcmResult<Self> {
        check_range(start, end, self.num_frames())?;
        let mut frames = Vec::with_capacity(self.num_frames() - (end - start + 1));
        frames.extend_from_slice(&self.frames()[..start]);
        frames.extend_from_slice(&self.frames()[end + 1..]);
        Ok(self.with_frames(frames))
    }

    fn concat(&self, other: &Self) -> PcmResult<Self> {
        check_rates(self, other)?;
        let mut frames = Vec::with_capacity(self.num_frames() + other.num_frames());
        frames.extend_from_slice(self.frames());
        frames.extend_from_slice(other.frames());
        Ok(self.with_frames(frames))
    }

    fn mix(&self, other: &Self) -> PcmResult<Self> {
        check_rates(self, other)?;
        if self.num_frames() != other.num_frames() {
            return Err(PcmError::Format(format!(
                "frame count mismatch: {} vs {}",
                self.num_frames(),
                other.num_frames()
            )));
        }
        let frames = self
            .frames()
            .iter()
            .zip(other.frames())
            .map(|(a, b)| F::from_channels(|ch| a.channel(ch).saturating_add(b.channel(ch))))
            .collect();
        Ok(self.with_frames(frames))
    }
}
