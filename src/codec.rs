//! Byte-level codec for headerless raw PCM, plus whole-file adapters.
//!
//! A raw file has no header; the layout is implicit from call-site knowledge
//! of the sample rate, bit width, and channel count. Samples are
//! little-endian regardless of host, interleaved channel 0 then channel 1
//! within each frame, so the same bytes decode identically on every
//! platform and `decode` is the exact inverse of `encode`.

use crate::error::{PcmError, PcmResult};
use crate::repr::AudioBuffer;
use crate::traits::Frame;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Decodes a flat byte sequence into a typed buffer.
///
/// Frame `i` occupies bytes `[i * F::BYTES, (i + 1) * F::BYTES)`. A
/// zero-length input decodes to an empty buffer.
///
/// # Errors
/// [`PcmError::Format`] when the byte length is not a whole number of
/// frames for the target layout, or when `sample_rate` is zero.
pub fn decode<F: Frame>(bytes: &[u8], sample_rate: u32) -> PcmResult<AudioBuffer<F>> {
    if bytes.len() % F::BYTES != 0 {
        return Err(PcmError::Format(format!(
            "{} bytes is not a whole number of {}-byte frames",
            bytes.len(),
            F::BYTES
        )));
    }
    let frames: Vec<F> = bytes.chunks_exact(F::BYTES).map(F::read_le).collect();
    debug!(bytes = bytes.len(), frames = frames.len(), "decoded raw pcm");
    AudioBuffer::new(frames, sample_rate)
}

/// Encodes a buffer into its exact on-disk byte sequence.
///
/// Inverse of [`decode`]: `decode(&encode(&b), b.sample_rate())` yields a
/// buffer equal to `b`.
pub fn encode<F: Frame>(buffer: &AudioBuffer<F>) -> Vec<u8> {
    let mut out = Vec::with_capacity(buffer.num_frames() * F::BYTES);
    for frame in buffer.frames() {
        frame.write_le(&mut out);
    }
    out
}

/// Reads and decodes an entire raw PCM file.
///
/// The whole file is materialized in memory; there is no streaming mode.
///
/// # Errors
/// [`PcmError::Io`] when the file cannot be read; [`PcmError::Format`] when
/// its length does not divide into frames.
pub fn load<F: Frame>(path: impl AsRef<Path>, sample_rate: u32) -> PcmResult<AudioBuffer<F>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read raw pcm file");
    decode(&bytes, sample_rate)
}

/// Encodes and writes a buffer to `path` in one shot.
///
/// # Errors
/// [`PcmError::Io`] when the destination cannot be created or written.
pub fn save<F: Frame>(buffer: &AudioBuffer<F>, path: impl AsRef<Path>) -> PcmResult<()> {
    let path = path.as_ref();
    fs::write(path, encode(buffer))?;
    debug!(path = %path.display(), frames = buffer.num_frames(), "wrote raw pcm file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_partial_frames() {
        assert!(matches!(
            decode::<i16>(&[0x00, 0x01, 0x02], 8_000),
            Err(PcmError::Format(_))
        ));
        assert!(matches!(
            decode::<(i8, i8)>(&[0x00, 0x01, 0x02], 8_000),
            Err(PcmError::Format(_))
        ));
        assert!(matches!(
            decode::<(i16, i16)>(&[0x00; 6], 8_000),
            Err(PcmError::Format(_))
        ));
    }

    #[test]
    fn decode_reads_little_endian_interleaved() {
        let bytes = [0x01, 0x00, 0xFF, 0xFF];

        let mono = decode::<i16>(&bytes, 8_000).unwrap();
        assert_eq!(mono.frames(), &[1, -1]);

        let stereo = decode::<(i16, i16)>(&bytes, 8_000).unwrap();
        assert_eq!(stereo.frames(), &[(1, -1)]);
    }

    #[test]
    fn zero_length_input_decodes_to_empty_buffer() {
        let buffer = decode::<i16>(&[], 8_000).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.sample_rate(), 8_000);
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let mono =
            AudioBuffer::<i16>::new(vec![0, 1, -1, i16::MAX, i16::MIN, 12_345], 44_100).unwrap();
        let decoded = decode::<i16>(&encode(&mono), 44_100).unwrap();
        assert_eq!(decoded, mono);

        let stereo =
            AudioBuffer::<(i8, i8)>::new(vec![(0, 1), (-1, i8::MAX), (i8::MIN, -7)], 22_050)
                .unwrap();
        let decoded = decode::<(i8, i8)>(&encode(&stereo), 22_050).unwrap();
        assert_eq!(decoded, stereo);

        let empty = AudioBuffer::<(i16, i16)>::new(vec![], 8_000).unwrap();
        assert_eq!(decode::<(i16, i16)>(&encode(&empty), 8_000).unwrap(), empty);
    }

    #[test]
    fn encoded_length_matches_layout() {
        let stereo = AudioBuffer::<(i16, i16)>::silence(5, 8_000).unwrap();
        assert_eq!(encode(&stereo).len(), 5 * 2 * 2);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.raw");

        let buffer = AudioBuffer::<(i16, i16)>::new(vec![(1, -1), (300, -300)], 44_100).unwrap();
        save(&buffer, &path).unwrap();
        let loaded = load::<(i16, i16)>(&path, 44_100).unwrap();
        assert_eq!(loaded, buffer);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load::<i16>(dir.path().join("absent.raw"), 8_000);
        assert!(matches!(result, Err(PcmError::Io(_))));
    }
}
