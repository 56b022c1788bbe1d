//! Ethereum address type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::ETH_ADDRESS_SIZE;
use crate::error::{EnsError, Result};

/// A 20-byte Ethereum address.
///
/// Parsing is case-insensitive, so checksummed and lowercase renderings of
/// the same address compare equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EthAddress {
    bytes: [u8; ETH_ADDRESS_SIZE],
}

impl EthAddress {
    /// Creates an address from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ETH_ADDRESS_SIZE {
            return Err(EnsError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                ETH_ADDRESS_SIZE,
                bytes.len()
            )));
        }

        let mut arr = [0u8; ETH_ADDRESS_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Creates from a fixed-size array.
    pub fn from_array(bytes: [u8; ETH_ADDRESS_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Parses from hex string (with or without 0x prefix).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// Lowercase hex without the `0x` prefix.
    pub fn to_lower_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Lowercase hex with the `0x` prefix.
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", self.to_lower_hex())
    }
}

impl FromStr for EthAddress {
    type Err = EnsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EthAddress({})", self.to_hex_string())
    }
}

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksummed_and_lowercase_are_equal() {
        let checksummed: EthAddress = "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e".parse().unwrap();
        let lower: EthAddress = "00000000000c2e074ec69a0dfb2997ba6c7d2e1e".parse().unwrap();
        assert_eq!(checksummed, lower);
        assert_eq!(
            checksummed.to_lower_hex(),
            "00000000000c2e074ec69a0dfb2997ba6c7d2e1e"
        );
    }

    #[test]
    fn test_formatting() {
        let addr = EthAddress::from_array([0xAB; 20]);
        let s = addr.to_string();
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 42);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = EthAddress::from_hex("0x1234").unwrap_err();
        assert!(matches!(err, EnsError::InvalidAddress(_)));
    }
}
