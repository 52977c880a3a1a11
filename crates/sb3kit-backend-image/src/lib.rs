//! sb3kit Image Backend
//!
//! This crate encodes RGBA pixel rasters into PNG files.
//!
//! # Features
//!
//! - **CRC-32**: table-driven IEEE checksum shared by every chunk
//! - **Chunk framing**: one routine writes length, type, payload and CRC
//! - **Pluggable compression**: any [`compress::Deflate`] implementation,
//!   `flate2` zlib by default
//! - **Deterministic PNG**: fixed level and filter, byte-identical output
//!
//! # Example
//!
//! ```
//! use sb3kit_backend_image::encode_image;
//!
//! let pixels = vec![255u8; 4 * 4 * 4];
//! let png = encode_image(&pixels, 4, 4).unwrap();
//!
//! assert_eq!(&png[1..4], b"PNG");
//! ```

pub mod chunk;
pub mod compress;
pub mod crc;
pub mod error;
pub mod png;

// Re-export main types for convenience
pub use chunk::{Chunk, ChunkType};
pub use compress::{Deflate, ZlibDeflate};
pub use crc::{crc32, Crc32};
pub use error::{ImageError, ImageResult};
pub use png::PngEncoder;

use sb3kit_spec::ImageConfig;

/// Encodes row-major RGBA `pixels` into a PNG file using default settings.
///
/// `pixels.len()` must equal `width * height * 4`.
pub fn encode_image(pixels: &[u8], width: u32, height: u32) -> ImageResult<Vec<u8>> {
    PngEncoder::new(&ImageConfig::default()).encode(pixels, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb3kit_spec::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

    #[test]
    fn test_encode_image_default_dimensions() {
        let pixels = vec![128u8; (DEFAULT_WIDTH * DEFAULT_HEIGHT * 4) as usize];
        let png = encode_image(&pixels, DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
        assert_eq!(&png[0..8], &crate::png::SIGNATURE);
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(
            &png[png.len() - 12..],
            &[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn test_encode_image_rejects_short_buffer() {
        assert!(matches!(
            encode_image(&[0; 3], 1, 1),
            Err(ImageError::PixelBufferSize { .. })
        ));
    }
}
