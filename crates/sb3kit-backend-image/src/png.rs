//! Deterministic PNG writer.
//!
//! Output is always: the 8-byte signature, one `IHDR`, one `IDAT`, one
//! `IEND`. Pixels are 8-bit RGBA, non-interlaced, every scanline using
//! filter type 0. With a fixed compression level the same pixels always
//! produce the same bytes.

use sb3kit_spec::ImageConfig;

use crate::chunk::{Chunk, ChunkType};
use crate::compress::{Deflate, ZlibDeflate};
use crate::error::{ImageError, ImageResult};

/// PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Length of the IHDR payload.
pub const IHDR_LEN: usize = 13;
/// Bits per channel.
pub const BIT_DEPTH: u8 = 8;
/// Color type 6: truecolor with alpha.
pub const COLOR_TYPE_RGBA: u8 = 6;
/// Compression method 0: zlib deflate.
pub const COMPRESSION_METHOD: u8 = 0;
/// Filter method 0: the five basic scanline filters.
pub const FILTER_METHOD: u8 = 0;
/// Interlace method 0: none.
pub const INTERLACE_METHOD: u8 = 0;
/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;
/// Scanline filter type written before every row.
pub const FILTER_NONE: u8 = 0;

/// Returns the required RGBA buffer length for `width` x `height`.
pub fn rgba_len(width: u32, height: u32) -> ImageResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or(ImageError::DimensionsOverflow { width, height })
}

/// Builds the IHDR payload.
pub fn header_data(width: u32, height: u32) -> [u8; IHDR_LEN] {
    let mut data = [0u8; IHDR_LEN];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = BIT_DEPTH;
    data[9] = COLOR_TYPE_RGBA;
    data[10] = COMPRESSION_METHOD;
    data[11] = FILTER_METHOD;
    data[12] = INTERLACE_METHOD;
    data
}

/// Lays out `pixels` as PNG scanlines, each prefixed with [`FILTER_NONE`].
///
/// A zero-area image has no scanlines and yields an empty buffer.
pub fn scanlines(pixels: &[u8], width: u32, height: u32) -> Vec<u8> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let stride = width as usize * BYTES_PER_PIXEL;
    let mut out = Vec::with_capacity((stride + 1) * height as usize);
    for row in pixels.chunks_exact(stride) {
        out.push(FILTER_NONE);
        out.extend_from_slice(row);
    }
    out
}

/// RGBA PNG encoder.
#[derive(Debug, Clone, Default)]
pub struct PngEncoder<D = ZlibDeflate> {
    deflate: D,
}

impl PngEncoder<ZlibDeflate> {
    /// Creates an encoder using `flate2` at the configured level.
    pub fn new(config: &ImageConfig) -> Self {
        Self {
            deflate: ZlibDeflate::new(config.compression),
        }
    }
}

impl<D: Deflate> PngEncoder<D> {
    /// Creates an encoder around any compressor.
    pub fn with_deflate(deflate: D) -> Self {
        Self { deflate }
    }

    /// Encodes `pixels` (row-major RGBA, top row first) into a PNG file.
    ///
    /// # Errors
    /// - [`ImageError::PixelBufferSize`] if `pixels.len() != width * height * 4`
    /// - [`ImageError::DimensionsOverflow`] if that product is not addressable
    /// - [`ImageError::Compression`] if the compressor fails
    /// - [`ImageError::ChunkTooLarge`] if the compressed payload is too long
    pub fn encode(&self, pixels: &[u8], width: u32, height: u32) -> ImageResult<Vec<u8>> {
        let expected = rgba_len(width, height)?;
        if pixels.len() != expected {
            return Err(ImageError::PixelBufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        let compressed = self.deflate.compress(&scanlines(pixels, width, height))?;

        // Build every chunk before writing so a failure leaves nothing framed
        let chunks = [
            Chunk::new(ChunkType::IHDR, header_data(width, height).to_vec())?,
            Chunk::new(ChunkType::IDAT, compressed)?,
            Chunk::new(ChunkType::IEND, Vec::new())?,
        ];

        let total = SIGNATURE.len() + chunks.iter().map(Chunk::encoded_len).sum::<usize>();
        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(&SIGNATURE);
        for chunk in &chunks {
            chunk.write_to(&mut out);
        }

        tracing::debug!(width, height, bytes = out.len(), "encoded png");
        Ok(out)
    }
}
