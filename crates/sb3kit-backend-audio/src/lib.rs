//! sb3kit Audio Backend
//!
//! This crate encodes normalized floating-point samples into mono 16-bit PCM
//! WAV files.
//!
//! # Overview
//!
//! Encoding is a pure function of its inputs: the same samples and rate
//! always yield the same bytes. Unusable sample rates are never fatal; they
//! are replaced or normalized, and each adjustment is reported as an
//! [`sb3kit_spec::EncodeWarning`] and as a `tracing` event.
//!
//! # Example
//!
//! ```
//! use sb3kit_backend_audio::encode_audio;
//!
//! let samples = [0.0f32, 0.5, -0.5, 1.0];
//! let wav = encode_audio(&samples, 48000).unwrap();
//!
//! assert_eq!(&wav[0..4], b"RIFF");
//! assert_eq!(wav.len(), 44 + 2 * samples.len());
//! ```
//!
//! # Crate Structure
//!
//! - [`encode_audio()`] - Main entry point with default settings
//! - [`rate`] - Sample-rate normalization
//! - [`wav`] - Quantization and the WAV container writer

pub mod error;
pub mod rate;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use rate::SampleRate;
pub use wav::{WavEncoder, WavEncoding};

/// Encodes mono samples into a complete WAV file using default settings.
///
/// Output length is always `44 + 2 * samples.len()`.
pub fn encode_audio(samples: &[f32], sample_rate: impl Into<f64>) -> AudioResult<Vec<u8>> {
    WavEncoder::default()
        .encode(samples, sample_rate)
        .map(|encoding| encoding.data)
}
