//! Waveform synthesis.
//!
//! Pure functions mapping frequency, duration, and volume to quantized
//! 16-bit sample sequences at the fixed 44100 Hz sample rate. Phase
//! math runs in f64; quantization truncates toward zero.

use std::f64::consts::TAU;

use rand::Rng;

/// Sample rate shared by all synthesis and encoding, in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Full-scale amplitude for 16-bit quantization.
const FULL_SCALE: f64 = 32767.0;

/// Number of samples in a segment of `duration` seconds.
///
/// Zero or negative durations yield zero samples; this is a valid empty
/// segment, not an error.
pub fn sample_count(duration: f32) -> usize {
    (f64::from(duration) * f64::from(SAMPLE_RATE)).round().max(0.0) as usize
}

/// Quantizes a raw sample in [-1.0, 1.0] to a 16-bit value.
///
/// Truncates toward zero. Out-of-range input (volume > 1.0 upstream)
/// saturates at the i16 bounds.
fn quantize(raw: f64) -> i16 {
    (raw * FULL_SCALE) as i16
}

/// Generates a pure sine tone, zero initial phase.
pub fn tone(freq: f32, duration: f32, volume: f32) -> Vec<i16> {
    let rate = f64::from(SAMPLE_RATE);
    let freq = f64::from(freq);
    let volume = f64::from(volume);
    (0..sample_count(duration))
        .map(|i| {
            let t = i as f64 / rate;
            quantize(volume * (TAU * (freq * t)).sin())
        })
        .collect()
}

/// Generates a bipolar square wave with a 50% duty cycle.
pub fn square(freq: f32, duration: f32, volume: f32) -> Vec<i16> {
    let rate = f64::from(SAMPLE_RATE);
    let freq = f64::from(freq);
    let hi = quantize(f64::from(volume));
    let lo = quantize(-f64::from(volume));
    (0..sample_count(duration))
        .map(|i| {
            let phase = (freq * i as f64 / rate).fract();
            if phase < 0.5 {
                hi
            } else {
                lo
            }
        })
        .collect()
}

/// Generates uniform white noise from the given random source.
///
/// Each sample is an independent draw from [-1, 1] scaled by `volume`.
/// Callers wanting reproducible output pass a seeded RNG; the binary
/// passes `thread_rng()`.
pub fn noise(duration: f32, volume: f32, rng: &mut impl Rng) -> Vec<i16> {
    let volume = f64::from(volume);
    (0..sample_count(duration))
        .map(|_| quantize(volume * (rng.gen::<f64>() * 2.0 - 1.0)))
        .collect()
}

/// Generates a linear frequency sweep (chirp).
///
/// Phase is the time-integral of the instantaneous angular frequency,
/// not freq(t) substituted into a fixed-phase sine; the substitution
/// would produce phase discontinuities at every sample step.
pub fn sweep(start_freq: f32, end_freq: f32, duration: f32, volume: f32) -> Vec<i16> {
    let rate = f64::from(SAMPLE_RATE);
    let start = f64::from(start_freq);
    let end = f64::from(end_freq);
    let dur = f64::from(duration);
    let volume = f64::from(volume);
    (0..sample_count(duration))
        .map(|i| {
            let t = i as f64 / rate;
            let phase = TAU * (start * t + 0.5 * (end - start) * t * t / dur);
            quantize(volume * phase.sin())
        })
        .collect()
}
