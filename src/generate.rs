//! One-shot generation pass over the sound catalog.
//!
//! Renders each recipe to a sample sequence and writes one WAV per
//! sound. Everything is computed in memory and written once; nothing
//! persists between passes except the output files.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::audio::{samples_to_duration, write_wav};
use crate::catalog::all_sounds;
use crate::error::{Result, SfxError};
use crate::synth::{self, SAMPLE_RATE};
use crate::types::{Segment, Waveform};

/// Directory the generation pass writes into, created if absent.
pub const OUTPUT_DIR: &str = "public/sounds";

/// Metadata for one written sound file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSound {
    /// Catalog name of the sound.
    pub name: &'static str,
    /// Path of the written WAV file.
    pub path: PathBuf,
    /// Number of mono frames written.
    pub sample_count: usize,
}

impl GeneratedSound {
    /// Audio duration of the written file, in seconds.
    pub fn duration_sec(&self) -> f32 {
        samples_to_duration(self.sample_count, SAMPLE_RATE)
    }
}

fn render_segment(segment: &Segment, rng: &mut impl Rng) -> Vec<i16> {
    match segment.waveform {
        Waveform::Sine { freq } => synth::tone(freq, segment.duration, segment.volume),
        Waveform::Square { freq } => synth::square(freq, segment.duration, segment.volume),
        Waveform::Noise => synth::noise(segment.duration, segment.volume, rng),
        Waveform::Sweep {
            start_freq,
            end_freq,
        } => synth::sweep(start_freq, end_freq, segment.duration, segment.volume),
    }
}

/// Renders a recipe by concatenating its segments' samples in order.
pub fn render(segments: &[Segment], rng: &mut impl Rng) -> Vec<i16> {
    let mut samples = Vec::new();
    for segment in segments {
        samples.extend(render_segment(segment, rng));
    }
    samples
}

/// Generates every catalog sound into `out_dir`.
///
/// Creates `out_dir` if absent, then writes one `{name}.wav` per
/// catalog entry, overwriting existing files. Returns metadata for each
/// written file in catalog order. Fails fast on the first I/O error.
pub fn generate_all(out_dir: &Path, rng: &mut impl Rng) -> Result<Vec<GeneratedSound>> {
    fs::create_dir_all(out_dir).map_err(|e| SfxError::dir_create_failed(out_dir, e))?;

    let mut written = Vec::new();
    for sound in all_sounds() {
        let samples = render(&sound.segments, rng);
        let path = out_dir.join(sound.file_name());
        write_wav(&samples, &path, SAMPLE_RATE)?;
        written.push(GeneratedSound {
            name: sound.name,
            path,
            sample_count: samples.len(),
        });
    }

    Ok(written)
}
