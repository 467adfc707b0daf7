//! WAV file writer for generated sound effects.
//!
//! Serializes sample sequences to mono 16-bit PCM WAV using the hound
//! crate. Little-endian byte order and the minimal header come from the
//! container format; no metadata beyond that is written.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Result, SfxError};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per encoded sample.
pub const BITS_PER_SAMPLE: u16 = 16;

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes quantized samples to a WAV file.
///
/// Creates or overwrites the destination. An empty sample slice
/// produces a valid header-only file with zero data frames.
///
/// # Arguments
///
/// * `samples` - Quantized 16-bit mono samples
/// * `path` - Output file path
/// * `sample_rate` - Sample rate in Hz (44100 for all catalog sounds)
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    let mut writer = WavWriter::create(path, wav_spec(sample_rate))
        .map_err(|e| SfxError::wav_write_failed(path, e))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| SfxError::wav_write_failed(path, e))?;
    }

    writer
        .finalize()
        .map_err(|e| SfxError::wav_write_failed(path, e))?;

    Ok(())
}

/// Writes quantized samples to an in-memory WAV buffer.
///
/// Returns the complete WAV file contents as a byte vector.
pub fn write_wav_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    {
        let cursor = std::io::Cursor::new(&mut buffer);
        let mut writer =
            WavWriter::new(cursor, wav_spec(sample_rate)).map_err(SfxError::wav_encode_failed)?;

        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(SfxError::wav_encode_failed)?;
        }

        writer.finalize().map_err(SfxError::wav_encode_failed)?;
    }

    Ok(buffer)
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::SAMPLE_RATE;
    use tempfile::tempdir;

    #[test]
    fn write_wav_creates_file_with_expected_spec() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let samples = vec![0i16, 16383, -16383, 0];
        write_wav(&samples, &path, SAMPLE_RATE).unwrap();

        assert!(path.exists());

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, CHANNELS);
        assert_eq!(spec.sample_rate, SAMPLE_RATE);
        assert_eq!(spec.bits_per_sample, BITS_PER_SAMPLE);
        assert_eq!(spec.sample_format, SampleFormat::Int);
    }

    #[test]
    fn write_then_read_is_lossless() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.wav");

        let samples: Vec<i16> = (-100i16..100).map(|i| i * 300).collect();
        write_wav(&samples, &path, SAMPLE_RATE).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn empty_sequence_produces_valid_header_only_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.wav");

        write_wav(&[], &path, SAMPLE_RATE).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.len(), 0);
        assert_eq!(reader.spec().channels, CHANNELS);
    }

    #[test]
    fn write_wav_to_buffer_returns_valid_wav() {
        let samples = vec![0i16, 1000, -1000];
        let buffer = write_wav_to_buffer(&samples, SAMPLE_RATE).unwrap();

        // WAV files start with "RIFF"
        assert_eq!(&buffer[0..4], b"RIFF");

        let mut reader = hound::WavReader::new(std::io::Cursor::new(buffer)).unwrap();
        assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn write_wav_fails_for_unwritable_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.wav");

        let err = write_wav(&[0i16], &path, SAMPLE_RATE).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::WavWriteFailed);
    }

    #[test]
    fn samples_to_duration_calculation() {
        assert_eq!(samples_to_duration(44100, 44100), 1.0);
        assert_eq!(samples_to_duration(4410, 44100), 0.1);
        assert_eq!(samples_to_duration(0, 44100), 0.0);
    }
}
