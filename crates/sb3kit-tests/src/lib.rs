//! sb3kit Test Infrastructure
//!
//! This crate checks the encoders from the outside:
//!
//! - **Format validation**: independent WAV and PNG parsers with their own
//!   CRC-32, so encoder and checker never share a bug
//! - **Reader interop**: output opened by third-party decoders
//! - **Determinism**: byte-identical output across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sb3kit-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod format_validators;
pub mod harness;

// Re-export commonly used items
pub use determinism::{verify_determinism, DeterminismResult};
pub use sb3kit_spec::content_hash;
pub use format_validators::{validate_png, validate_wav, FormatError, PngInfo, WavInfo};
