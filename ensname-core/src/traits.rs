//! Common traits for ensname.
//!
//! The contract-calling layer lives outside this workspace. These traits are
//! the seam it plugs into.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Node;

// ═══════════════════════════════════════════════════════════════════════════════
// RESOLVER CONTRACT TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// A resolver contract, as seen through some RPC client.
///
/// Implementations might:
/// - Issue `eth_call` requests against a live node
/// - Serve records from memory (for testing/offline use)
#[async_trait]
pub trait ResolverContract: Send + Sync {
    /// ERC-165 `supportsInterface(bytes4)`.
    async fn supports_interface(&self, interface_id: [u8; 4]) -> Result<bool>;

    /// Calls a single-argument record function such as `addr(bytes32)`
    /// or `contenthash(bytes32)` and returns its raw return data.
    async fn call_record(&self, function: &str, node: Node) -> Result<Vec<u8>>;
}
