//! sfx-gen: procedural UI sound effect generator.
//!
//! Renders the fixed sound catalog and writes one WAV file per sound
//! into the output directory, reporting each written file on stderr.

use std::path::Path;

use sfx_gen::error::Result;
use sfx_gen::generate::{generate_all, OUTPUT_DIR};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let out_dir = Path::new(OUTPUT_DIR);

    eprintln!("=== sfx-gen ===");
    eprintln!("Output directory: {}", out_dir.display());
    eprintln!();

    let mut rng = rand::thread_rng();
    let written = generate_all(out_dir, &mut rng)?;

    for sound in &written {
        eprintln!(
            "Generated: {} ({:.2}s)",
            sound.path.display(),
            sound.duration_sec()
        );
    }

    let total_sec: f32 = written.iter().map(|s| s.duration_sec()).sum();
    eprintln!();
    eprintln!("Wrote {} files, {:.2}s of audio total.", written.len(), total_sec);

    Ok(())
}
