//! Constants for ENS name hashing.
//!
//! Sizes, the root node, and the well-known names and interface IDs that
//! resolver lookups are built on.

// ═══════════════════════════════════════════════════════════════════════════════
// HASH SIZES
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of a Keccak-256 digest, and therefore of every namehash node.
pub const HASH256_SIZE: usize = 32;

/// Size of an Ethereum address in bytes.
pub const ETH_ADDRESS_SIZE: usize = 20;

/// The node of the root name `""`: 32 zero bytes.
///
/// Every namehash fold starts from this value.
pub const EMPTY_NODE: [u8; HASH256_SIZE] = [0u8; HASH256_SIZE];

// ═══════════════════════════════════════════════════════════════════════════════
// NAME SYNTAX
// ═══════════════════════════════════════════════════════════════════════════════

/// Separator between the labels of a name.
pub const LABEL_SEPARATOR: char = '.';

/// Parent domain of all reverse records (`<hex address>.addr.reverse`).
pub const REVERSE_REGISTRAR_DOMAIN: &str = "addr.reverse";

// ═══════════════════════════════════════════════════════════════════════════════
// ENS CONTRACTS
// ═══════════════════════════════════════════════════════════════════════════════

/// ERC-165 interface ID of `contenthash(bytes32)` (EIP-1577).
pub const RESOLVER_EIP1577_INTERFACE: [u8; 4] = [0xbc, 0x1c, 0x58, 0xd1];

/// ERC-165 interface ID of the legacy `content(bytes32)` record.
pub const RESOLVER_LEGACY_INTERFACE: [u8; 4] = [0xd8, 0x38, 0x9d, 0xc5];

/// Resolver function returning an EIP-1577 content hash.
pub const CONTENTHASH_FUNCTION: &str = "contenthash";

/// Resolver function returning a legacy 32-byte content record.
pub const LEGACY_CONTENT_FUNCTION: &str = "content";
