//! sb3kit Shared Contracts
//!
//! This crate holds the pieces both encoder backends agree on:
//!
//! - [`error`]: the `BackendError` reporting trait, a unified `EncodeError`,
//!   and the warning codes used to report non-fatal input normalization
//! - [`config`]: serde-backed encoder configuration and named defaults
//! - [`hash`]: BLAKE3 content hashing of encoded assets
//!
//! # Example
//!
//! ```
//! use sb3kit_spec::{CompressionLevel, EncoderConfig};
//!
//! let config = EncoderConfig::from_json(r#"{ "image": { "compression": "best" } }"#).unwrap();
//! assert_eq!(config.image.compression, CompressionLevel::Best);
//! assert_eq!(config.audio.default_sample_rate, 48000);
//! ```

pub mod config;
pub mod error;
pub mod hash;

pub use config::{
    AudioConfig, CompressionLevel, EncoderConfig, ImageConfig, DEFAULT_HEIGHT,
    DEFAULT_SAMPLE_RATE, DEFAULT_WIDTH,
};
pub use error::{BackendError, ConfigError, EncodeError, EncodeWarning, WarningCode};
pub use hash::content_hash;
