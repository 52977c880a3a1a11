//! Sample-rate normalization.
//!
//! Callers may hand the encoder any number as a sample rate. Whatever they
//! pass, the header always receives a positive integer that fits in 32 bits;
//! each adjustment made on the way is reported as an [`EncodeWarning`].

use sb3kit_spec::{EncodeWarning, WarningCode};

/// Rounds to the nearest integer, sending exact halves toward +infinity.
///
/// `-2.5` becomes `-2` and `2.5` becomes `3`. Both the header rate and the
/// sample quantizer round this way.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// A validated sample rate in Hz. Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleRate(u32);

impl SampleRate {
    /// Creates a sample rate from an integer, rejecting zero.
    pub fn new(hz: u32) -> Option<Self> {
        (hz > 0).then_some(Self(hz))
    }

    /// Returns the rate in Hz.
    pub fn hz(&self) -> u32 {
        self.0
    }

    /// Normalizes an arbitrary requested rate.
    ///
    /// - zero, NaN and infinities use `fallback` (W001)
    /// - fractional rates are rounded to the nearest integer, halves toward
    ///   +infinity (W003)
    /// - negative rates use the absolute value of the rounded rate (W002)
    /// - rates that round to zero or exceed `u32::MAX` use `fallback` (W001)
    ///
    /// A zero `fallback` is replaced by [`sb3kit_spec::DEFAULT_SAMPLE_RATE`].
    pub fn normalize(requested: f64, fallback: u32) -> (Self, Vec<EncodeWarning>) {
        let fallback = Self::new(fallback)
            .unwrap_or(Self(sb3kit_spec::DEFAULT_SAMPLE_RATE));
        let mut warnings = Vec::new();

        if !requested.is_finite() || requested == 0.0 {
            warnings.push(EncodeWarning::new(
                WarningCode::SampleRateDefaulted,
                format!(
                    "sample rate {} is unusable, using {} Hz",
                    requested, fallback.0
                ),
            ));
            return (fallback, warnings);
        }

        if requested < 0.0 {
            warnings.push(EncodeWarning::new(
                WarningCode::NegativeSampleRate,
                format!("sample rate {} is negative, using its magnitude", requested),
            ));
        }

        if requested.fract() != 0.0 {
            warnings.push(EncodeWarning::new(
                WarningCode::FractionalSampleRate,
                format!("sample rate {} is not an integer, rounding", requested),
            ));
        }

        let rounded = round_half_up(requested).abs();
        if rounded < 1.0 || rounded > u32::MAX as f64 {
            warnings.push(EncodeWarning::new(
                WarningCode::SampleRateDefaulted,
                format!(
                    "sample rate {} is out of range, using {} Hz",
                    requested, fallback.0
                ),
            ));
            return (fallback, warnings);
        }

        (Self(rounded as u32), warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn codes(warnings: &[EncodeWarning]) -> Vec<&'static str> {
        warnings.iter().map(|w| w.code.code()).collect()
    }

    #[test]
    fn test_valid_rate_passes_through() {
        let (rate, warnings) = SampleRate::normalize(44100.0, 48000);
        assert_eq!(rate.hz(), 44100);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_zero_uses_fallback() {
        let (rate, warnings) = SampleRate::normalize(0.0, 48000);
        assert_eq!(rate.hz(), 48000);
        assert_eq!(codes(&warnings), vec!["W001"]);
    }

    #[test]
    fn test_nan_and_infinity_use_fallback() {
        for requested in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let (rate, warnings) = SampleRate::normalize(requested, 22050);
            assert_eq!(rate.hz(), 22050);
            assert_eq!(codes(&warnings), vec!["W001"]);
        }
    }

    #[test]
    fn test_negative_takes_magnitude() {
        let (rate, warnings) = SampleRate::normalize(-22050.0, 48000);
        assert_eq!(rate.hz(), 22050);
        assert_eq!(codes(&warnings), vec!["W002"]);
    }

    #[test]
    fn test_fractional_rounds() {
        let (rate, warnings) = SampleRate::normalize(44099.6, 48000);
        assert_eq!(rate.hz(), 44100);
        assert_eq!(codes(&warnings), vec!["W003"]);

        let (rate, warnings) = SampleRate::normalize(-8000.4, 48000);
        assert_eq!(rate.hz(), 8000);
        assert_eq!(codes(&warnings), vec!["W002", "W003"]);
    }

    #[test]
    fn test_negative_half_rounds_before_magnitude() {
        let (rate, warnings) = SampleRate::normalize(-22050.5, 48000);
        assert_eq!(rate.hz(), 22050);
        assert_eq!(codes(&warnings), vec!["W002", "W003"]);

        let (rate, _) = SampleRate::normalize(22050.5, 48000);
        assert_eq!(rate.hz(), 22051);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(0.49), 0.0);
        assert_eq!(round_half_up(7.0), 7.0);
    }

    #[test]
    fn test_rounds_to_zero_uses_fallback() {
        let (rate, warnings) = SampleRate::normalize(0.2, 48000);
        assert_eq!(rate.hz(), 48000);
        assert_eq!(codes(&warnings), vec!["W003", "W001"]);

        let (rate, warnings) = SampleRate::normalize(-0.5, 48000);
        assert_eq!(rate.hz(), 48000);
        assert_eq!(codes(&warnings), vec!["W002", "W003", "W001"]);
    }

    #[test]
    fn test_too_large_uses_fallback() {
        let (rate, warnings) = SampleRate::normalize(u32::MAX as f64 + 1.0, 48000);
        assert_eq!(rate.hz(), 48000);
        assert_eq!(codes(&warnings), vec!["W001"]);

        let (rate, warnings) = SampleRate::normalize(u32::MAX as f64, 48000);
        assert_eq!(rate.hz(), u32::MAX);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_zero_fallback_is_replaced() {
        let (rate, _) = SampleRate::normalize(0.0, 0);
        assert_eq!(rate.hz(), sb3kit_spec::DEFAULT_SAMPLE_RATE);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(SampleRate::new(0).is_none());
        assert_eq!(SampleRate::new(8000).map(|r| r.hz()), Some(8000));
    }
}
