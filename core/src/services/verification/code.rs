//! Verification code generation and hashing

use rand::{rngs::OsRng, Rng};
use sha2::{Digest, Sha256};

/// Generate a random 6-digit verification code
///
/// Uses the OS CSPRNG and draws uniformly from 100000..=999999, so the code
/// never carries a leading zero and every value is equally likely.
pub fn generate_code() -> String {
    let mut rng = OsRng;
    let code: u32 = rng.gen_range(100_000..=999_999);
    code.to_string()
}

/// Hash a verification code for storage
///
/// Deterministic SHA-256, hex-encoded, so verification compares hashes
/// instead of plaintext. Codes are short-lived 6-digit values; no salt.
pub fn hash_code(code: &str) -> String {
    hex::encode(Sha256::digest(code.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::verification_code::CODE_LENGTH;

    #[test]
    fn generated_codes_are_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn generated_codes_vary() {
        let codes: std::collections::HashSet<String> =
            (0..100).map(|_| generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn hash_is_deterministic_hex_sha256() {
        let hash = hash_code("123456");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(hash, hash_code("123456"));
        assert_ne!(hash, hash_code("123457"));
    }
}
