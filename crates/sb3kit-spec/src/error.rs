//! Error and warning types shared by the encoder backends.

use thiserror::Error;

/// Warning codes for non-fatal input normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Sample rate replaced by the configured default
    SampleRateDefaulted,
    /// W002: Negative sample rate, absolute value used
    NegativeSampleRate,
    /// W003: Non-integral sample rate, rounded to nearest
    FractionalSampleRate,
    /// W004: Non-finite samples in the buffer
    NonFiniteSamples,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::SampleRateDefaulted => "W001",
            WarningCode::NegativeSampleRate => "W002",
            WarningCode::FractionalSampleRate => "W003",
            WarningCode::NonFiniteSamples => "W004",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A normalization performed while encoding.
///
/// Warnings never abort an encode. Backends collect them next to the encoded
/// bytes and also emit them as `tracing` events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
}

impl EncodeWarning {
    /// Creates a new encode warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Emits this warning on the `tracing` warn level.
    pub fn emit(&self) {
        tracing::warn!(code = %self.code, "{}", self.message);
    }
}

impl std::fmt::Display for EncodeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Errors from loading or saving encoder configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so that callers handling
/// both audio and image output can report failures uniformly.
///
/// # Example
///
/// ```ignore
/// use sb3kit_spec::error::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001" or "IMAGE_002". Codes are
    /// stable and may be matched on programmatically.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category ("audio" or "image").
    fn category(&self) -> &'static str;
}

/// A unified error type that can wrap any backend error.
#[derive(Debug)]
pub struct EncodeError {
    /// The error code (e.g., "AUDIO_001", "IMAGE_002").
    pub code: &'static str,
    /// The human-readable error message.
    pub message: String,
    /// The error category.
    pub category: &'static str,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl EncodeError {
    /// Create an `EncodeError` from any `BackendError` implementor.
    pub fn from_backend<E: BackendError + Send + Sync + 'static>(err: E) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
            category: err.category(),
            source: Some(Box::new(err)),
        }
    }

    /// Create an `EncodeError` with explicit values and no underlying source.
    pub fn new(code: &'static str, message: impl Into<String>, category: &'static str) -> Self {
        Self {
            code,
            message: message.into(),
            category,
            source: None,
        }
    }
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
