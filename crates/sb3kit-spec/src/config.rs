//! Encoder configuration.
//!
//! Configuration is plain data: it is deserialized from JSON, handed to an
//! encoder at construction, and never mutated by encoding. Every field has a
//! default, so `{}` is a complete configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Sample rate substituted when the caller supplies an unusable one.
pub const DEFAULT_SAMPLE_RATE: u32 = 48_000;

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 480;

/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 360;

/// Top-level configuration for both encoders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Audio encoder settings.
    pub audio: AudioConfig,
    /// Image encoder settings.
    pub image: ImageConfig,
}

impl EncoderConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Audio encoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    /// Rate written when the requested one is zero, non-finite or too large.
    pub default_sample_rate: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            default_sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl AudioConfig {
    /// The fallback sample rate, never zero.
    pub fn fallback_rate(&self) -> u32 {
        if self.default_sample_rate == 0 {
            DEFAULT_SAMPLE_RATE
        } else {
            self.default_sample_rate
        }
    }
}

/// Image encoder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    /// Deflate effort for the pixel payload.
    pub compression: CompressionLevel,
}

/// Deflate effort used for the image data chunk.
///
/// Every level yields a valid zlib stream. `Stored` emits uncompressed deflate
/// blocks for callers that want to skip compression work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionLevel {
    /// Level 6, the zlib default.
    #[default]
    Default,
    /// Level 1.
    Fast,
    /// Level 9.
    Best,
    /// Level 0, stored blocks only.
    Stored,
}

impl CompressionLevel {
    /// The numeric zlib level (0-9).
    pub fn level(&self) -> u32 {
        match self {
            CompressionLevel::Default => 6,
            CompressionLevel::Fast => 1,
            CompressionLevel::Best => 9,
            CompressionLevel::Stored => 0,
        }
    }
}
