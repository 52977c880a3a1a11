//! Deterministic WAV file writer.
//!
//! This module writes mono 16-bit PCM WAV files with no timestamps or
//! variable metadata, so the same samples and rate always produce the same
//! bytes. The layout is the canonical 44-byte RIFF header followed by the
//! little-endian sample payload.

use sb3kit_spec::{AudioConfig, EncodeWarning, WarningCode};

use crate::error::{AudioError, AudioResult};
use crate::rate::{round_half_up, SampleRate};

/// RIFF container tag.
pub const RIFF_TAG: &[u8; 4] = b"RIFF";
/// RIFF form type for WAV.
pub const WAVE_TAG: &[u8; 4] = b"WAVE";
/// Format chunk tag.
pub const FMT_TAG: &[u8; 4] = b"fmt ";
/// Data chunk tag.
pub const DATA_TAG: &[u8; 4] = b"data";

/// Size of the complete header, including the data chunk header.
pub const HEADER_LEN: usize = 44;
/// Bytes between the RIFF size field and the start of the payload.
pub const RIFF_SIZE_OVERHEAD: u32 = 36;
/// Size of the PCM format chunk body.
pub const FMT_CHUNK_LEN: u32 = 16;
/// Format tag for linear PCM.
pub const FORMAT_PCM: u16 = 1;
/// Channel count. Only mono is written.
pub const CHANNELS: u16 = 1;
/// Bits per sample.
pub const BITS_PER_SAMPLE: u16 = 16;
/// Bytes per sample frame.
pub const BLOCK_ALIGN: u16 = CHANNELS * BITS_PER_SAMPLE / 8;

/// Scale applied to negative samples; -1.0 maps to `i16::MIN`.
const NEGATIVE_SCALE: f64 = 32768.0;
/// Scale applied to non-negative samples; 1.0 maps to `i16::MAX`.
const POSITIVE_SCALE: f64 = 32767.0;

/// WAV file format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavFormat {
    /// Creates a mono 16-bit WAV format.
    pub fn mono(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate: sample_rate.hz(),
        }
    }

    /// Calculates byte rate (bytes per second).
    ///
    /// Wraps modulo 2^32 for rates above `u32::MAX / 2`, as a 32-bit header
    /// field would.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.wrapping_mul(BLOCK_ALIGN as u32)
    }
}

/// Quantizes one sample to signed 16-bit.
///
/// The sample is clamped to [-1.0, 1.0] first. Negative values scale by
/// 32768 and non-negative values by 32767, so both ends of the i16 range are
/// reachable without overflow. Exact halves round toward +infinity.
/// NaN quantizes to 0.
pub fn quantize(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    let s = f64::from(sample).clamp(-1.0, 1.0);
    if s < 0.0 {
        round_half_up(s * NEGATIVE_SCALE) as i16
    } else {
        round_half_up(s * POSITIVE_SCALE) as i16
    }
}

/// Converts f32 samples to 16-bit PCM bytes.
///
/// # Returns
/// PCM data as little-endian 16-bit samples
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&quantize(sample).to_le_bytes());
    }
    pcm
}

/// Appends the 44-byte header for a payload of `data_size` bytes.
fn write_header(out: &mut Vec<u8>, format: &WavFormat, data_size: u32) {
    // RIFF header
    out.extend_from_slice(RIFF_TAG);
    out.extend_from_slice(&(RIFF_SIZE_OVERHEAD + data_size).to_le_bytes());
    out.extend_from_slice(WAVE_TAG);

    // fmt chunk
    out.extend_from_slice(FMT_TAG);
    out.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&format.sample_rate.to_le_bytes());
    out.extend_from_slice(&format.byte_rate().to_le_bytes());
    out.extend_from_slice(&BLOCK_ALIGN.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    out.extend_from_slice(DATA_TAG);
    out.extend_from_slice(&data_size.to_le_bytes());
}

/// Writes a complete WAV file for `samples` to a byte vector.
///
/// # Errors
/// [`AudioError::TooManySamples`] if the RIFF size field would overflow.
pub fn write_wav_to_vec(format: &WavFormat, samples: &[f32]) -> AudioResult<Vec<u8>> {
    let data_size = samples
        .len()
        .checked_mul(BLOCK_ALIGN as usize)
        .and_then(|size| u32::try_from(size).ok())
        .filter(|size| size.checked_add(RIFF_SIZE_OVERHEAD).is_some())
        .ok_or(AudioError::TooManySamples {
            count: samples.len(),
        })?;

    let mut out = Vec::with_capacity(HEADER_LEN + data_size as usize);
    write_header(&mut out, format, data_size);
    out.extend_from_slice(&samples_to_pcm16(samples));
    Ok(out)
}

/// Result of WAV encoding.
#[derive(Debug, Clone)]
pub struct WavEncoding {
    /// Complete WAV file bytes.
    pub data: Vec<u8>,
    /// Sample rate written to the header.
    pub sample_rate: u32,
    /// Normalizations applied to the input.
    pub warnings: Vec<EncodeWarning>,
}

/// Mono 16-bit WAV encoder.
#[derive(Debug, Clone, Default)]
pub struct WavEncoder {
    config: AudioConfig,
}

impl WavEncoder {
    /// Creates an encoder with the given settings.
    pub fn new(config: AudioConfig) -> Self {
        Self { config }
    }

    /// Encodes `samples` at `sample_rate` into a WAV container.
    ///
    /// The rate goes through [`SampleRate::normalize`]. Every warning raised
    /// on the way is returned and emitted through `tracing`.
    pub fn encode(&self, samples: &[f32], sample_rate: impl Into<f64>) -> AudioResult<WavEncoding> {
        let (rate, mut warnings) =
            SampleRate::normalize(sample_rate.into(), self.config.fallback_rate());

        let non_finite = samples.iter().filter(|s| !s.is_finite()).count();
        if non_finite > 0 {
            warnings.push(EncodeWarning::new(
                WarningCode::NonFiniteSamples,
                format!(
                    "{} of {} samples are not finite; NaN encodes as silence",
                    non_finite,
                    samples.len()
                ),
            ));
        }

        for warning in &warnings {
            warning.emit();
        }

        let data = write_wav_to_vec(&WavFormat::mono(rate), samples)?;
        tracing::debug!(
            samples = samples.len(),
            sample_rate = rate.hz(),
            bytes = data.len(),
            "encoded wav"
        );

        Ok(WavEncoding {
            data,
            sample_rate: rate.hz(),
            warnings,
        })
    }
}
