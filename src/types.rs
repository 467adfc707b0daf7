//! Core types for synthesis requests.
//!
//! A [`Segment`] describes one stretch of audio to synthesize: a
//! waveform shape, a duration, and a peak volume. A [`Sound`] is a
//! named, ordered list of segments whose rendered sample sequences are
//! concatenated into one output file.

/// Waveform shape for a synthesis segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waveform {
    /// Pure sinusoid at a fixed frequency in Hz.
    Sine { freq: f32 },
    /// Bipolar square wave at a fixed frequency in Hz, 50% duty cycle.
    Square { freq: f32 },
    /// Uniform white noise.
    Noise,
    /// Linear frequency sweep (chirp) from `start_freq` to `end_freq` in Hz.
    Sweep { start_freq: f32, end_freq: f32 },
}

/// One synthesis request, consumed once to produce a sample sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Waveform shape to synthesize.
    pub waveform: Waveform,
    /// Duration in seconds. Zero or negative yields an empty sequence.
    pub duration: f32,
    /// Peak amplitude as a fraction of full scale, 0.0 to 1.0.
    pub volume: f32,
}

impl Segment {
    /// Creates a sine tone segment.
    pub fn sine(freq: f32, duration: f32, volume: f32) -> Self {
        Self {
            waveform: Waveform::Sine { freq },
            duration,
            volume,
        }
    }

    /// Creates a square wave (buzzer) segment.
    pub fn square(freq: f32, duration: f32, volume: f32) -> Self {
        Self {
            waveform: Waveform::Square { freq },
            duration,
            volume,
        }
    }

    /// Creates a white noise segment.
    pub fn noise(duration: f32, volume: f32) -> Self {
        Self {
            waveform: Waveform::Noise,
            duration,
            volume,
        }
    }

    /// Creates a linear frequency sweep segment.
    pub fn sweep(start_freq: f32, end_freq: f32, duration: f32, volume: f32) -> Self {
        Self {
            waveform: Waveform::Sweep {
                start_freq,
                end_freq,
            },
            duration,
            volume,
        }
    }
}

/// A named sound effect recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    /// Base name of the output file, without extension.
    pub name: &'static str,
    /// Segments concatenated in order to form the clip.
    pub segments: Vec<Segment>,
}

impl Sound {
    /// Creates a new Sound from its name and segments.
    pub fn new(name: &'static str, segments: Vec<Segment>) -> Self {
        Self { name, segments }
    }

    /// Returns the output filename for this sound.
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name)
    }
}
