//! Amplitude-shaping operations for [`AudioBuffer`].

use super::traits::{AudioProcessing, AudioStatistics};
use crate::error::{PcmError, PcmResult};
use crate::repr::AudioBuffer;
use crate::traits::{ChannelLevels, Frame, PcmSample};

impl<F: Frame> AudioProcessing<F> for AudioBuffer<F> {
    fn gain(&self, factors: F::Levels) -> Self {
        let frames = self
            .frames()
            .iter()
            .map(|frame| {
                F::from_channels(|ch| {
                    F::Sample::from_f64_clamped(frame.channel(ch).as_f64() * factors.channel(ch))
                })
            })
            .collect();
        self.with_frames(frames)
    }

    fn normalize(&self, target: F::Levels) -> PcmResult<Self> {
        let current = self.rms()?;
        for ch in 0..F::CHANNELS {
            if current.channel(ch) == 0.0 && target.channel(ch) != 0.0 {
                return Err(PcmError::Arithmetic(format!(
                    "cannot normalize channel {ch}: current RMS is zero"
                )));
            }
        }
        // A silent channel with a zero target keeps a unit factor.
        let factors = F::Levels::from_channels(|ch| {
            let current_rms = current.channel(ch);
            if current_rms == 0.0 {
                1.0
            } else {
                target.channel(ch) / current_rms
            }
        });
        Ok(self.gain(factors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn gain_scales_and_rounds_to_nearest() {
        let buffer = AudioBuffer::<i16>::new(vec![100, -100, 3], 44_100).unwrap();
        assert_eq!(buffer.gain(1.5).frames(), &[150, -150, 5]);
        assert_eq!(buffer.gain(0.5).frames(), &[50, -50, 2]);
    }

    #[test]
    fn gain_saturates_at_both_bounds() {
        let buffer = AudioBuffer::<i16>::new(vec![32_000, -32_000], 44_100).unwrap();
        assert_eq!(buffer.gain(1.5).frames(), &[i16::MAX, i16::MIN]);
    }

    #[test]
    fn gain_applies_per_stereo_channel() {
        let buffer = AudioBuffer::<(i16, i16)>::new(vec![(100, 100)], 44_100).unwrap();
        assert_eq!(buffer.gain((2.0, 0.5)).frames(), &[(200, 50)]);
    }

    #[test]
    fn unity_gain_is_the_identity() {
        let buffer = AudioBuffer::<i8>::new(vec![-5, 0, 5, i8::MAX], 8_000).unwrap();
        assert_eq!(buffer.gain(1.0), buffer);
    }

    #[test]
    fn normalize_reaches_the_target_rms() {
        let buffer = AudioBuffer::<i16>::new(vec![100, 200, 300], 44_100).unwrap();
        let normalized = buffer.normalize(500.0).unwrap();
        let rms = normalized.rms().unwrap();
        assert!((rms - 500.0).abs() < 1.0, "rms {rms} missed target");
    }

    #[test]
    fn normalize_is_independent_per_stereo_channel() {
        let frames = vec![(100, 0), (100, 0)];
        let buffer = AudioBuffer::<(i16, i16)>::new(frames, 44_100).unwrap();
        let normalized = buffer.normalize((50.0, 0.0)).unwrap();
        assert_eq!(normalized.frames(), &[(50, 0), (50, 0)]);
    }

    #[test]
    fn normalize_rejects_silent_input_with_nonzero_target() {
        let buffer = AudioBuffer::<i16>::new(vec![0, 0, 0], 44_100).unwrap();
        assert!(matches!(
            buffer.normalize(100.0),
            Err(PcmError::Arithmetic(_))
        ));
    }

    #[test]
    fn normalize_silent_input_to_zero_is_a_no_op() {
        let buffer = AudioBuffer::<i16>::new(vec![0, 0, 0], 44_100).unwrap();
        assert_eq!(buffer.normalize(0.0).unwrap(), buffer);
    }

    #[test]
    fn normalize_empty_buffer_propagates_the_rms_error() {
        let buffer = AudioBuffer::<i16>::new(vec![], 44_100).unwrap();
        assert!(matches!(buffer.normalize(100.0), Err(PcmError::Range(_))));
    }

    #[test]
    fn normalize_convergence_survives_rounding() {
        let buffer = AudioBuffer::<i16>::new(vec![33, -71, 512, -9_000, 21], 44_100).unwrap();
        let target = 1_000.0;
        let rms = buffer.normalize(target).unwrap().rms().unwrap();
        assert_approx_eq!(rms, target, 1.0);
    }
}
