//! Error types for image backend.

use sb3kit_spec::BackendError;
use thiserror::Error;

use crate::chunk::ChunkType;

/// Result type for image operations.
pub type ImageResult<T> = Result<T, ImageError>;

/// Errors that can occur during image encoding.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Pixel buffer length does not match the dimensions.
    #[error("expected {expected} bytes for {width}x{height} RGBA, got {actual}")]
    PixelBufferSize {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
        /// Required buffer length (width * height * 4).
        expected: usize,
        /// Supplied buffer length.
        actual: usize,
    },

    /// Dimensions too large to address.
    #[error("dimensions overflow: {width}x{height}")]
    DimensionsOverflow {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
    },

    /// Chunk payload exceeds the container's length limit.
    #[error("{tag} chunk payload of {len} bytes exceeds the 2^31-1 limit")]
    ChunkTooLarge {
        /// Chunk type.
        tag: ChunkType,
        /// Payload length.
        len: usize,
    },

    /// The compression stage failed.
    #[error("compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

impl BackendError for ImageError {
    fn code(&self) -> &'static str {
        match self {
            ImageError::PixelBufferSize { .. } => "IMAGE_001",
            ImageError::DimensionsOverflow { .. } => "IMAGE_002",
            ImageError::ChunkTooLarge { .. } => "IMAGE_003",
            ImageError::Compression(_) => "IMAGE_004",
        }
    }

    fn category(&self) -> &'static str {
        "image"
    }
}
