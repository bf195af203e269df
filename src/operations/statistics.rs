//! Loudness statistics for [`AudioBuffer`].

use super::traits::AudioStatistics;
use crate::error::{PcmError, PcmResult};
use crate::repr::AudioBuffer;
use crate::traits::{ChannelLevels, Frame, PcmSample};

impl<F: Frame> AudioStatistics<F> for AudioBuffer<F> {
    /// RMS = `sqrt(mean(x^2))` per channel, accumulated in `f64` so that
    /// squaring cannot overflow the sample type.
    fn rms(&self) -> PcmResult<F::Levels> {
        if self.is_empty() {
            return Err(PcmError::Range(
                "RMS is undefined over an empty buffer".to_string(),
            ));
        }
        let mut sums = vec![0.0f64; F::CHANNELS];
        for frame in self.frames() {
            for (ch, sum) in sums.iter_mut().enumerate() {
                *sum += frame.channel(ch).as_f64().powi(2);
            }
        }
        let count = self.num_frames() as f64;
        Ok(F::Levels::from_channels(|ch| (sums[ch] / count).sqrt()))
    }
}
