//! Determinism testing helpers.
//!
//! Both encoders are pure functions of their input, so repeated runs must be
//! byte-identical. These helpers run an encode several times and report the
//! first differing byte when they are not.

use std::fmt;

use sb3kit_spec::content_hash;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the reference output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the reference output.
    pub hash: String,
    /// If non-deterministic, the first difference found.
    pub diff_info: Option<DiffInfo>,
}

/// Information about the first byte difference found between runs.
#[derive(Debug, Clone)]
pub struct DiffInfo {
    /// Byte offset where the difference was found.
    pub offset: usize,
    /// Value from the first run, if it extends that far.
    pub expected: Option<u8>,
    /// Value from the differing run, if it extends that far.
    pub actual: Option<u8>,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |b: Option<u8>| match b {
            Some(b) => format!("0x{:02X}", b),
            None => "end of output".to_string(),
        };
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            show(self.expected),
            show(self.actual),
            self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Returns the first offset at which `a` and `b` differ.
pub fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    a.iter()
        .zip(b.iter())
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

/// Run `encode_fn` `runs` times and verify all outputs are identical.
///
/// # Example
///
/// ```rust
/// use sb3kit_tests::determinism::verify_determinism;
///
/// let result = verify_determinism(|| sb3kit_backend_audio::encode_audio(&[0.5], 8000).unwrap(), 3);
/// assert!(result.is_deterministic);
/// ```
pub fn verify_determinism<F, O>(encode_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = encode_fn();
    let reference_bytes = reference.as_ref();
    let hash = content_hash(reference_bytes);

    for run_index in 1..runs {
        let output = encode_fn();
        let output_bytes = output.as_ref();
        if let Some(offset) = first_difference(reference_bytes, output_bytes) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference_bytes.len(),
                hash,
                diff_info: Some(DiffInfo {
                    offset,
                    expected: reference_bytes.get(offset).copied(),
                    actual: output_bytes.get(offset).copied(),
                    run_index,
                }),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference_bytes.len(),
        hash,
        diff_info: None,
    }
}

/// Macro for easy determinism testing.
///
/// Generates a test that evaluates the expression three times (or `runs`
/// times) and asserts byte-identical output. The expression must return a
/// type that implements `AsRef<[u8]>`.
///
/// ```rust,ignore
/// use sb3kit_tests::test_determinism;
///
/// test_determinism!(wav_sine, {
///     encode_audio(&sine_wave(440.0, 0.1, 48000), 48000).unwrap()
/// });
/// ```
#[macro_export]
macro_rules! test_determinism {
    ($name:ident, $encode:expr) => {
        $crate::test_determinism!($name, runs = 3, $encode);
    };

    ($name:ident, runs = $runs:expr, $encode:expr) => {
        #[test]
        fn $name() {
            $crate::determinism::verify_determinism(|| $encode, $runs).assert_deterministic();
        }
    };
}
