//! WAV file format validator.

use super::{read_u16_le, read_u32_le, FormatError};

const HEADER_SIZE: usize = 44;

/// Information extracted from a canonical 44-byte-header WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// Value of the RIFF size field.
    pub riff_size: u32,
    /// Size of the fmt chunk body.
    pub fmt_size: u32,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Byte rate field.
    pub byte_rate: u32,
    /// Block alignment field.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Value of the data chunk size field.
    pub data_size: u32,
    /// Decoded 16-bit samples.
    pub samples: Vec<i16>,
}

/// Validate a WAV file and extract its header fields and samples.
///
/// Requires the canonical layout: `RIFF` / `WAVE`, a 16-byte `fmt ` chunk at
/// offset 12, a `data` chunk at offset 36, and size fields that agree with
/// the buffer length.
///
/// # Arguments
/// * `data` - Raw bytes of the WAV file
///
/// # Returns
/// * `Ok(WavInfo)` - Successfully parsed WAV file information
/// * `Err(FormatError)` - Invalid or inconsistent WAV file
pub fn validate_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    if data.len() < HEADER_SIZE {
        return Err(FormatError::new(
            "WAV",
            format!(
                "File too short: {} bytes (minimum {} required)",
                data.len(),
                HEADER_SIZE
            ),
        ));
    }

    let expect_tag = |offset: usize, tag: &[u8; 4]| {
        if &data[offset..offset + 4] == tag {
            Ok(())
        } else {
            Err(FormatError::at_offset(
                "WAV",
                format!(
                    "expected {:?}, got {:?}",
                    String::from_utf8_lossy(tag),
                    String::from_utf8_lossy(&data[offset..offset + 4])
                ),
                offset,
            ))
        }
    };

    expect_tag(0, b"RIFF")?;
    expect_tag(8, b"WAVE")?;
    expect_tag(12, b"fmt ")?;
    expect_tag(36, b"data")?;

    let riff_size = read_u32_le(data, 4);
    if riff_size as usize != data.len() - 8 {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "RIFF size {} does not match file length {}",
                riff_size,
                data.len()
            ),
            4,
        ));
    }

    let data_size = read_u32_le(data, 40);
    if data_size as usize != data.len() - HEADER_SIZE {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "data size {} does not match payload length {}",
                data_size,
                data.len() - HEADER_SIZE
            ),
            40,
        ));
    }

    if data_size % 2 != 0 {
        return Err(FormatError::at_offset(
            "WAV",
            "odd payload length for 16-bit samples",
            40,
        ));
    }

    let samples = data[HEADER_SIZE..]
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok(WavInfo {
        riff_size,
        fmt_size: read_u32_le(data, 16),
        audio_format: read_u16_le(data, 20),
        channels: read_u16_le(data, 22),
        sample_rate: read_u32_le(data, 24),
        byte_rate: read_u32_le(data, 28),
        block_align: read_u16_le(data, 32),
        bits_per_sample: read_u16_le(data, 34),
        data_size,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let data_size = samples.len() * 2;
        let mut wav = Vec::with_capacity(44 + data_size);

        // RIFF header
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_size as u32).to_le_bytes());
        wav.extend_from_slice(b"WAVE");

        // fmt chunk
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes()); // chunk size
        wav.extend_from_slice(&1u16.to_le_bytes()); // audio format (PCM)
        wav.extend_from_slice(&1u16.to_le_bytes()); // mono
        wav.extend_from_slice(&sample_rate.to_le_bytes());
        wav.extend_from_slice(&(sample_rate * 2).to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());

        // data chunk
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&(data_size as u32).to_le_bytes());
        for s in samples {
            wav.extend_from_slice(&s.to_le_bytes());
        }

        wav
    }

    #[test]
    fn test_validate_wav_valid() {
        let wav = create_test_wav(44100, &[0, 1, -1, i16::MAX, i16::MIN]);
        let info = validate_wav(&wav).expect("Should parse valid WAV");

        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.byte_rate, 88200);
        assert_eq!(info.bits_per_sample, 16);
        assert_eq!(info.audio_format, 1);
        assert_eq!(info.samples, vec![0, 1, -1, i16::MAX, i16::MIN]);
    }

    #[test]
    fn test_validate_wav_too_short() {
        let err = validate_wav(&[0u8; 10]).unwrap_err();
        assert_eq!(err.format, "WAV");
        assert!(err.message.contains("too short"));
    }

    #[test]
    fn test_validate_wav_invalid_riff() {
        let mut wav = create_test_wav(44100, &[0; 10]);
        wav[0..4].copy_from_slice(b"XXXX");
        let err = validate_wav(&wav).unwrap_err();
        assert!(err.message.contains("RIFF"));
        assert_eq!(err.offset, Some(0));
    }

    #[test]
    fn test_validate_wav_truncated_payload() {
        let mut wav = create_test_wav(44100, &[0; 10]);
        wav.truncate(wav.len() - 2);
        let err = validate_wav(&wav).unwrap_err();
        assert_eq!(err.offset, Some(4));
    }
}
