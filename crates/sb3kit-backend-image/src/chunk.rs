//! PNG chunk framing.
//!
//! Every chunk is serialized as
//!
//! ```text
//! length (u32 BE) | type (4 ASCII bytes) | data | crc32(type ++ data) (u32 BE)
//! ```
//!
//! and this module is the only place that layout is written.

use std::fmt;

use crate::crc::Crc32;
use crate::error::{ImageError, ImageResult};

/// Largest payload a chunk may declare.
pub const MAX_CHUNK_LEN: usize = (1 << 31) - 1;

/// Bytes a chunk adds around its payload: length, type and CRC.
pub const CHUNK_OVERHEAD: usize = 12;

/// A four-letter ASCII chunk type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    /// Image header.
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    /// Image data.
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    /// Image trailer.
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    /// The raw tag bytes.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkType({})", self)
    }
}

/// An immutable chunk: a type tag and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    tag: ChunkType,
    data: Vec<u8>,
}

impl Chunk {
    /// Creates a chunk, rejecting payloads over [`MAX_CHUNK_LEN`].
    pub fn new(tag: ChunkType, data: Vec<u8>) -> ImageResult<Self> {
        if data.len() > MAX_CHUNK_LEN {
            return Err(ImageError::ChunkTooLarge {
                tag,
                len: data.len(),
            });
        }
        Ok(Self { tag, data })
    }

    /// The chunk type.
    pub fn tag(&self) -> ChunkType {
        self.tag
    }

    /// The payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// CRC-32 over the type tag followed by the payload.
    pub fn crc(&self) -> u32 {
        let mut hasher = Crc32::new();
        hasher.update(self.tag.as_bytes());
        hasher.update(&self.data);
        hasher.finalize()
    }

    /// Serialized size including the 12 bytes of framing.
    pub fn encoded_len(&self) -> usize {
        CHUNK_OVERHEAD + self.data.len()
    }

    /// Appends the framed chunk to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        // Chunk::new bounds the length to 31 bits
        let len = self.data.len() as u32;
        out.reserve(self.encoded_len());
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(self.tag.as_bytes());
        out.extend_from_slice(&self.data);
        out.extend_from_slice(&self.crc().to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::crc32;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_chunk_framing() {
        let chunk = Chunk::new(ChunkType::IEND, Vec::new()).unwrap();
        let mut out = Vec::new();
        chunk.write_to(&mut out);
        assert_eq!(
            out,
            vec![0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
        );
        assert_eq!(chunk.encoded_len(), 12);
    }

    #[test]
    fn test_payload_framing() {
        let chunk = Chunk::new(ChunkType(*b"tEXt"), b"hello".to_vec()).unwrap();
        let mut out = Vec::new();
        chunk.write_to(&mut out);

        assert_eq!(out.len(), chunk.encoded_len());
        assert_eq!(&out[0..4], &5u32.to_be_bytes());
        assert_eq!(&out[4..8], b"tEXt");
        assert_eq!(&out[8..13], b"hello");
        assert_eq!(&out[13..17], &crc32(b"tEXthello").to_be_bytes());
    }

    #[test]
    fn test_write_appends() {
        let mut out = vec![0xAA];
        Chunk::new(ChunkType::IEND, Vec::new())
            .unwrap()
            .write_to(&mut out);
        assert_eq!(out.len(), 13);
        assert_eq!(out[0], 0xAA);
    }

    #[test]
    fn test_chunk_type_display() {
        assert_eq!(ChunkType::IHDR.to_string(), "IHDR");
        assert_eq!(format!("{:?}", ChunkType::IDAT), "ChunkType(IDAT)");
    }
}
