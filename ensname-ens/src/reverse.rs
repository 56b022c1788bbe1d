//! Reverse resolution names and address helpers.

use ensname_core::constants::REVERSE_REGISTRAR_DOMAIN;
use ensname_core::error::Result;
use ensname_core::types::{EthAddress, Node};

use crate::namehash::namehash;

/// Returns the reverse record name of an address,
/// e.g. `314159265dd8dbb310642f98f50c066173c1259b.addr.reverse`.
///
/// The address may be checksummed or lowercase, with or without `0x`.
pub fn address_to_reverse_domain(address: &str) -> Result<String> {
    let address = EthAddress::from_hex(address)?;
    Ok(format!(
        "{}.{}",
        address.to_lower_hex(),
        REVERSE_REGISTRAR_DOMAIN
    ))
}

/// Returns the node of an address's reverse record.
pub fn reverse_node(address: &str) -> Result<Node> {
    Ok(namehash(&address_to_reverse_domain(address)?))
}

/// Returns true if `address` is one of `addresses`.
pub fn address_in(address: &EthAddress, addresses: &[EthAddress]) -> bool {
    addresses.iter().any(|item| item == address)
}

/// Returns true for a missing, empty, or all-zero record value.
///
/// Resolvers answer unset records with zeros rather than an error.
pub fn is_none_or_zero_address(raw: Option<&[u8]>) -> bool {
    raw.map_or(true, |bytes| bytes.iter().all(|&b| b == 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ensname_core::EnsError;

    const ADDRESS: &str = "0x314159265dD8dbb310642f98f50C066173C1259b";

    #[test]
    fn test_reverse_domain_is_lowercase_unprefixed() {
        assert_eq!(
            address_to_reverse_domain(ADDRESS).unwrap(),
            "314159265dd8dbb310642f98f50c066173c1259b.addr.reverse"
        );
    }

    #[test]
    fn test_reverse_node_matches_parent_fold() {
        let node = reverse_node(ADDRESS).unwrap();
        let expected = crate::subnode(
            namehash("addr.reverse"),
            "314159265dd8dbb310642f98f50c066173c1259b",
        )
        .unwrap();
        assert_eq!(node, expected);
    }

    #[test]
    fn test_reverse_rejects_short_address() {
        let err = address_to_reverse_domain("0x1234").unwrap_err();
        assert!(matches!(err, EnsError::InvalidAddress(_)));
    }

    #[test]
    fn test_address_in_ignores_case() {
        let checksummed: EthAddress = ADDRESS.parse().unwrap();
        let lower: EthAddress = ADDRESS.to_lowercase().parse().unwrap();
        assert!(address_in(&checksummed, &[EthAddress::from_array([0; 20]), lower]));
        assert!(!address_in(&checksummed, &[EthAddress::from_array([0; 20])]));
    }

    #[test]
    fn test_is_none_or_zero_address() {
        assert!(is_none_or_zero_address(None));
        assert!(is_none_or_zero_address(Some(&[][..])));
        assert!(is_none_or_zero_address(Some(&[0u8; 32][..])));
        assert!(!is_none_or_zero_address(Some(&[0u8, 0, 1][..])));
    }
}
