//! Keccak-256 hashing.
//!
//! Note: Keccak-256 is NOT SHA3-256. They use different padding, and ENS
//! (like the rest of Ethereum) uses the original Keccak padding.

use sha3::{Digest, Keccak256};

use ensname_core::types::Hash256;

/// Computes the Keccak-256 digest of `input`.
pub fn keccak256(input: &[u8]) -> Hash256 {
    let mut hasher = Keccak256::new();
    hasher.update(input);
    Hash256::from_array(hasher.finalize().into())
}

/// Computes the Keccak-256 digest of the concatenation of `parts`.
///
/// Parts are fed to the hasher in order with no separators or length
/// prefixes, so `keccak256_concat(&[a, b]) == keccak256(a || b)`.
pub fn keccak256_concat(parts: &[&[u8]]) -> Hash256 {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    Hash256::from_array(hasher.finalize().into())
}

/// Computes the Keccak-256 digest of the UTF-8 bytes of `text`.
pub fn keccak256_text(text: &str) -> Hash256 {
    keccak256(text.as_bytes())
}
