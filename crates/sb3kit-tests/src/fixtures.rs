//! Input fixtures for encoder tests.
//!
//! All randomness is seeded PCG32, so fixtures are identical across runs
//! and platforms.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
pub fn create_rng(seed: u32) -> Pcg32 {
    // Expand 32-bit seed to 64-bit for PCG32 state
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// A sine tone of `frequency` Hz lasting `duration` seconds.
pub fn sine_wave(frequency: f64, duration: f64, sample_rate: u32) -> Vec<f32> {
    let len = (duration * sample_rate as f64).floor() as usize;
    let step = 2.0 * std::f64::consts::PI * frequency / sample_rate as f64;
    (0..len).map(|i| (step * i as f64).sin() as f32).collect()
}

/// Uniform white noise in [-1.0, 1.0).
pub fn white_noise(len: usize, seed: u32) -> Vec<f32> {
    let mut rng = create_rng(seed);
    (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect()
}

/// An opaque gray-noise RGBA frame, like a frame of TV static.
pub fn static_frame(width: u32, height: u32, seed: u32) -> Vec<u8> {
    let mut rng = create_rng(seed);
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width as usize * height as usize {
        let gray: u8 = rng.gen();
        pixels.extend_from_slice(&[gray, gray, gray, 255]);
    }
    pixels
}

/// An RGBA gradient with every channel varying.
pub fn gradient_frame(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) % 256) as u8,
                (255 - (x % 128)) as u8,
            ]);
        }
    }
    pixels
}
