use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of `input`.
pub fn digest_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Compare a submitted passphrase against a stored hex digest.
/// The plaintext is never stored; only the digest comparison decides.
pub fn verify(plaintext: &str, reference_hex: &str) -> bool {
    digest_hex(plaintext).eq_ignore_ascii_case(reference_hex)
}
