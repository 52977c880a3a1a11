//! PNG file format validator.

use std::io::Read;

use flate2::read::ZlibDecoder;

use super::{read_u32_be, FormatError};

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// One chunk as found in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngChunk {
    /// Offset of the length field.
    pub offset: usize,
    /// Declared payload length.
    pub length: u32,
    /// Four-letter chunk type.
    pub chunk_type: [u8; 4],
    /// Payload bytes.
    pub data: Vec<u8>,
    /// Stored CRC.
    pub crc: u32,
}

/// Information extracted from a PNG file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngInfo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Bit depth.
    pub bit_depth: u8,
    /// Color type (6 = RGBA).
    pub color_type: u8,
    /// Compression method (0 = deflate).
    pub compression_method: u8,
    /// Filter method (0 = adaptive).
    pub filter_method: u8,
    /// Interlace method (0 = none).
    pub interlace_method: u8,
    /// All chunks in file order.
    pub chunks: Vec<PngChunk>,
    /// Inflated concatenation of every IDAT payload.
    pub inflated: Vec<u8>,
}

impl PngInfo {
    /// Chunk type names in file order.
    pub fn chunk_types(&self) -> Vec<String> {
        self.chunks
            .iter()
            .map(|c| String::from_utf8_lossy(&c.chunk_type).into_owned())
            .collect()
    }
}

/// Bit-at-a-time CRC-32 (IEEE), independent of the encoder's table.
pub fn reference_crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
        }
    }
    crc ^ 0xFFFF_FFFF
}

/// Validate a PNG file chunk by chunk.
///
/// Checks:
/// - the 8-byte signature
/// - every chunk's declared length fits the file and its CRC matches
/// - IHDR is first and 13 bytes, IEND is last and empty
/// - the IDAT stream inflates to the byte count the header implies for
///   8-bit scanlines with one filter byte each (zero for zero-area images)
///
/// # Arguments
/// * `data` - Raw bytes of the PNG file
pub fn validate_png(data: &[u8]) -> Result<PngInfo, FormatError> {
    if data.len() < PNG_SIGNATURE.len() || data[0..8] != PNG_SIGNATURE {
        return Err(FormatError::at_offset("PNG", "Invalid PNG signature", 0));
    }

    let mut chunks = Vec::new();
    let mut offset = PNG_SIGNATURE.len();
    while offset < data.len() {
        if offset + 12 > data.len() {
            return Err(FormatError::at_offset("PNG", "Truncated chunk header", offset));
        }
        let length = read_u32_be(data, offset);
        let end = offset + 8 + length as usize;
        if end + 4 > data.len() {
            return Err(FormatError::at_offset(
                "PNG",
                format!("Chunk length {} runs past end of file", length),
                offset,
            ));
        }

        let mut chunk_type = [0u8; 4];
        chunk_type.copy_from_slice(&data[offset + 4..offset + 8]);
        let crc = read_u32_be(data, end);
        let expected_crc = reference_crc32(&data[offset + 4..end]);
        if crc != expected_crc {
            return Err(FormatError::at_offset(
                "PNG",
                format!(
                    "CRC mismatch in {}: stored 0x{:08X}, computed 0x{:08X}",
                    String::from_utf8_lossy(&chunk_type),
                    crc,
                    expected_crc
                ),
                end,
            ));
        }

        chunks.push(PngChunk {
            offset,
            length,
            chunk_type,
            data: data[offset + 8..end].to_vec(),
            crc,
        });
        offset = end + 4;
    }

    let first = chunks
        .first()
        .ok_or_else(|| FormatError::new("PNG", "No chunks"))?;
    if &first.chunk_type != b"IHDR" {
        return Err(FormatError::at_offset(
            "PNG",
            format!("First chunk must be IHDR, got {:?}", first.chunk_type),
            first.offset,
        ));
    }
    if first.data.len() != 13 {
        return Err(FormatError::at_offset(
            "PNG",
            format!("IHDR chunk must be 13 bytes, got {}", first.data.len()),
            first.offset,
        ));
    }

    let last = &chunks[chunks.len() - 1];
    if &last.chunk_type != b"IEND" || !last.data.is_empty() {
        return Err(FormatError::at_offset(
            "PNG",
            "Last chunk must be an empty IEND",
            last.offset,
        ));
    }

    let ihdr = &first.data;
    let width = read_u32_be(ihdr, 0);
    let height = read_u32_be(ihdr, 4);
    let bit_depth = ihdr[8];
    let color_type = ihdr[9];

    let idat: Vec<u8> = chunks
        .iter()
        .filter(|c| &c.chunk_type == b"IDAT")
        .flat_map(|c| c.data.iter().copied())
        .collect();
    let mut inflated = Vec::new();
    ZlibDecoder::new(idat.as_slice())
        .read_to_end(&mut inflated)
        .map_err(|e| FormatError::new("PNG", format!("IDAT stream does not inflate: {}", e)))?;

    let channels: usize = match color_type {
        0 | 3 => 1,
        2 => 3,
        4 => 2,
        6 => 4,
        other => {
            return Err(FormatError::new(
                "PNG",
                format!("Unknown color type: {}", other),
            ))
        }
    };
    let expected_len = if width == 0 || height == 0 {
        0
    } else {
        let row_bits = width as usize * channels * bit_depth as usize;
        (row_bits.div_ceil(8) + 1) * height as usize
    };
    if inflated.len() != expected_len {
        return Err(FormatError::new(
            "PNG",
            format!(
                "Inflated {} bytes, expected {} for {}x{}",
                inflated.len(),
                expected_len,
                width,
                height
            ),
        ));
    }

    Ok(PngInfo {
        width,
        height,
        bit_depth,
        color_type,
        compression_method: ihdr[10],
        filter_method: ihdr[11],
        interlace_method: ihdr[12],
        inflated,
        chunks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn chunk(tag: &[u8; 4], data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(tag);
        out.extend_from_slice(data);
        let mut covered = tag.to_vec();
        covered.extend_from_slice(data);
        out.extend_from_slice(&reference_crc32(&covered).to_be_bytes());
        out
    }

    fn create_test_png(width: u32, height: u32) -> Vec<u8> {
        let mut ihdr = Vec::new();
        ihdr.extend_from_slice(&width.to_be_bytes());
        ihdr.extend_from_slice(&height.to_be_bytes());
        ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);

        let raw = vec![0u8; (width as usize * 4 + 1) * height as usize];
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw).unwrap();
        let idat = encoder.finish().unwrap();

        let mut png = PNG_SIGNATURE.to_vec();
        png.extend(chunk(b"IHDR", &ihdr));
        png.extend(chunk(b"IDAT", &idat));
        png.extend(chunk(b"IEND", &[]));
        png
    }

    #[test]
    fn test_reference_crc() {
        assert_eq!(reference_crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_validate_png_valid_rgba() {
        let info = validate_png(&create_test_png(4, 3)).expect("Should parse valid PNG");
        assert_eq!(info.width, 4);
        assert_eq!(info.height, 3);
        assert_eq!(info.bit_depth, 8);
        assert_eq!(info.color_type, 6);
        assert_eq!(info.chunk_types(), vec!["IHDR", "IDAT", "IEND"]);
        assert_eq!(info.inflated.len(), 17 * 3);
    }

    #[test]
    fn test_validate_png_invalid_signature() {
        let mut png = create_test_png(2, 2);
        png[0] = 0x00;
        let err = validate_png(&png).unwrap_err();
        assert!(err.message.contains("signature"));
    }

    #[test]
    fn test_validate_png_bad_crc() {
        let mut png = create_test_png(2, 2);
        png[20] ^= 0x01; // inside IHDR width
        let err = validate_png(&png).unwrap_err();
        assert!(err.message.contains("CRC mismatch in IHDR"));
    }

    #[test]
    fn test_validate_png_missing_iend() {
        let mut png = create_test_png(2, 2);
        png.truncate(png.len() - 12);
        let err = validate_png(&png).unwrap_err();
        assert!(err.message.contains("IEND"));
    }
}
