//! 32-byte hash type used for label hashes and namehash nodes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{EMPTY_NODE, HASH256_SIZE};
use crate::error::{EnsError, Result};

/// A 32-byte Keccak-256 digest.
///
/// Rendered as `0x` followed by 64 lowercase hex characters, both by
/// `Display` and by serde.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256([u8; HASH256_SIZE]);

/// The namehash of a name: the key every resolver lookup is indexed by.
pub type Node = Hash256;

impl Hash256 {
    /// The root node (32 zero bytes).
    pub const EMPTY: Self = Self(EMPTY_NODE);

    /// Creates from a fixed-size array.
    pub const fn from_array(bytes: [u8; HASH256_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates from a slice that must be exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; HASH256_SIZE] = bytes.try_into().map_err(|_| {
            EnsError::ValidationError(format!(
                "expected {} bytes for a hash, got {}",
                HASH256_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// Parses from hex string (with or without 0x prefix).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }

    /// Returns the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; HASH256_SIZE] {
        &self.0
    }

    /// Consumes the hash and returns the array.
    pub const fn into_array(self) -> [u8; HASH256_SIZE] {
        self.0
    }

    /// Returns the `0x`-prefixed hex rendering.
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Returns true for the root node.
    pub fn is_empty_node(&self) -> bool {
        self.0 == EMPTY_NODE
    }
}

impl From<[u8; HASH256_SIZE]> for Hash256 {
    fn from(bytes: [u8; HASH256_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Hash256> for [u8; HASH256_SIZE] {
    fn from(hash: Hash256) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Hash256 {
    type Err = EnsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex_string())
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
