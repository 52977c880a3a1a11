//! Error types for audio backend.

use sb3kit_spec::BackendError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio encoding.
///
/// Unusable sample rates and non-finite samples are not errors; they are
/// normalized and reported as warnings.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The payload does not fit the 32-bit RIFF size fields.
    #[error("too many samples for a WAV container: {count}")]
    TooManySamples {
        /// Number of samples supplied.
        count: usize,
    },
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::TooManySamples { .. } => "AUDIO_001",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_samples_reporting() {
        let err = AudioError::TooManySamples { count: usize::MAX };
        assert_eq!(err.code(), "AUDIO_001");
        assert_eq!(err.category(), "audio");
        assert!(err.message().contains("too many samples"));
    }
}
