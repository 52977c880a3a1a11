//! Content hashing for encoded assets.

/// Computes the BLAKE3 hash of an encoded asset.
///
/// Returns a 64-character lowercase hexadecimal string. Identical input bytes
/// always hash identically, so the hash can name an asset in an archive.
///
/// # Example
/// ```
/// use sb3kit_spec::hash::content_hash;
///
/// let hash = content_hash(b"RIFF");
/// assert_eq!(hash.len(), 64);
/// ```
pub fn content_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_deterministic() {
        assert_eq!(content_hash(b"abc"), content_hash(b"abc"));
        assert_ne!(content_hash(b"abc"), content_hash(b"abd"));
    }

    #[test]
    fn test_content_hash_empty() {
        // BLAKE3 of the empty input
        assert_eq!(
            content_hash(&[]),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }
}
