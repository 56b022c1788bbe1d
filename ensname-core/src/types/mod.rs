//! Domain types for ensname.
//!
//! - [`Hash256`]: a 32-byte Keccak-256 digest, also the namehash [`Node`]
//! - [`EthAddress`]: a 20-byte Ethereum address

mod address;
mod node;

pub use address::*;
pub use node::*;
