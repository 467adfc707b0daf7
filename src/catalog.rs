//! The fixed sound catalog.
//!
//! Nine named UI feedback sounds, each a recipe of one or more
//! synthesis segments. Names double as output filenames; the set is
//! deliberately not configurable.

use crate::types::{Segment, Sound};

/// Returns every sound in the catalog, in generation order.
pub fn all_sounds() -> Vec<Sound> {
    vec![
        // Short high confirmation blip (A5)
        Sound::new("play", vec![Segment::sine(880.0, 0.1, 0.6)]),
        // Short low tone (A3)
        Sound::new("pass", vec![Segment::sine(220.0, 0.15, 0.6)]),
        // Very short high tick
        Sound::new("click", vec![Segment::sine(1500.0, 0.03, 0.3)]),
        // Rising sweep, A4 up an octave
        Sound::new("start", vec![Segment::sweep(440.0, 880.0, 0.5, 0.5)]),
        // C major arpeggio: C5 E5 G5 C6
        Sound::new(
            "win",
            vec![
                Segment::sine(523.25, 0.15, 0.6),
                Segment::sine(659.25, 0.15, 0.6),
                Segment::sine(783.99, 0.15, 0.6),
                Segment::sine(1046.50, 0.4, 0.6),
            ],
        ),
        // Descending minor line: G5 Eb5 C5
        Sound::new(
            "lose",
            vec![
                Segment::sine(783.99, 0.2, 0.6),
                Segment::sine(622.25, 0.2, 0.6),
                Segment::sine(523.25, 0.4, 0.6),
            ],
        ),
        // Two-tone siren, three cycles
        Sound::new("alert", siren_cycles(3)),
        // Low square-wave buzzer
        Sound::new("error", vec![Segment::square(150.0, 0.3, 0.5)]),
        // Noise tick
        Sound::new("countdown", vec![Segment::noise(0.05, 0.7)]),
    ]
}

/// Builds the alternating high/low segments of the alert siren.
fn siren_cycles(cycles: usize) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(cycles * 2);
    for _ in 0..cycles {
        segments.push(Segment::sine(800.0, 0.1, 0.5));
        segments.push(Segment::sine(600.0, 0.1, 0.5));
    }
    segments
}
