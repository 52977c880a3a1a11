//! Compression stage for the image data chunk.
//!
//! The data chunk carries a zlib stream. The encoder only frames whatever a
//! [`Deflate`] implementation returns; [`ZlibDeflate`] is the default,
//! backed by `flate2`.

use std::io::{self, Write};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use sb3kit_spec::CompressionLevel;

/// A deflate-compatible compressor producing a zlib stream.
pub trait Deflate {
    /// Compresses `data` in full.
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>>;
}

impl<F> Deflate for F
where
    F: Fn(&[u8]) -> io::Result<Vec<u8>>,
{
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        self(data)
    }
}

/// zlib compressor at a fixed level.
///
/// A fixed level keeps output byte-identical across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZlibDeflate {
    level: CompressionLevel,
}

impl ZlibDeflate {
    /// Creates a compressor at `level`.
    pub fn new(level: CompressionLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    pub fn level(&self) -> CompressionLevel {
        self.level
    }
}

impl Default for ZlibDeflate {
    fn default() -> Self {
        Self::new(CompressionLevel::Default)
    }
}

impl Deflate for ZlibDeflate {
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(
            Vec::with_capacity(data.len() / 2 + 64),
            Compression::new(self.level.level()),
        );
        encoder.write_all(data)?;
        encoder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn inflate(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        ZlibDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_zlib_roundtrip_all_levels() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
        for level in [
            CompressionLevel::Stored,
            CompressionLevel::Fast,
            CompressionLevel::Default,
            CompressionLevel::Best,
        ] {
            let compressed = ZlibDeflate::new(level).compress(&data).unwrap();
            assert_eq!(inflate(&compressed), data, "level {:?}", level);
        }
    }

    #[test]
    fn test_zlib_header() {
        let compressed = ZlibDeflate::default().compress(b"abc").unwrap();
        // CMF: deflate with a 32K window
        assert_eq!(compressed[0], 0x78);
        assert_eq!(((compressed[0] as u16) << 8 | compressed[1] as u16) % 31, 0);
    }

    #[test]
    fn test_empty_input_is_valid_stream() {
        let compressed = ZlibDeflate::default().compress(&[]).unwrap();
        assert!(!compressed.is_empty());
        assert!(inflate(&compressed).is_empty());
    }

    #[test]
    fn test_stored_does_not_shrink() {
        let data = vec![0u8; 10_000];
        let stored = ZlibDeflate::new(CompressionLevel::Stored)
            .compress(&data)
            .unwrap();
        let best = ZlibDeflate::new(CompressionLevel::Best)
            .compress(&data)
            .unwrap();
        assert!(stored.len() > data.len());
        assert!(best.len() < stored.len());
    }

    #[test]
    fn test_closure_compressor() {
        let identity = |data: &[u8]| -> io::Result<Vec<u8>> { Ok(data.to_vec()) };
        assert_eq!(identity.compress(b"xyz").unwrap(), b"xyz".to_vec());
    }
}
