//! Resolver record lookups keyed by namehash.
//!
//! These helpers only compute the node and interpret "unset" answers. The
//! contract call itself goes through a [`ResolverContract`], and record
//! payloads come back as raw bytes.

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use ensname_core::constants::{
    CONTENTHASH_FUNCTION, LEGACY_CONTENT_FUNCTION, RESOLVER_EIP1577_INTERFACE,
    RESOLVER_LEGACY_INTERFACE,
};
use ensname_core::error::{EnsError, Result};
use ensname_core::traits::ResolverContract;
use ensname_core::types::Node;

use crate::namehash::namehash;
use crate::reverse::is_none_or_zero_address;

/// Which content interface a record was read through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentInterface {
    /// `contenthash(bytes32)`, EIP-1577
    Eip1577,
    /// `content(bytes32)`
    Legacy,
}

/// A content record as returned by the resolver, undecoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Interface the record came from
    pub interface: ContentInterface,
    /// Raw record bytes
    #[serde(with = "hex")]
    pub raw: Vec<u8>,
}

/// Reads a single-node record such as `addr` from a resolver.
///
/// `name` must already be normalized. Returns `None` when the resolver
/// answers with empty or all-zero data.
#[instrument(skip(resolver))]
pub async fn resolve_other_record<R>(
    resolver: &R,
    function: &str,
    name: &str,
) -> Result<Option<Vec<u8>>>
where
    R: ResolverContract + ?Sized,
{
    let node = namehash(name);
    let data = resolver.call_record(function, node).await?;

    if is_none_or_zero_address(Some(data.as_slice())) {
        debug!(%node, "Record unset");
        return Ok(None);
    }

    Ok(Some(data))
}

/// Reads the content record of a name.
///
/// Prefers EIP-1577 `contenthash()` and falls back to legacy `content()`.
/// A resolver that supports neither is an [`EnsError::NonStandardResolver`].
#[instrument(skip(resolver))]
pub async fn resolve_content_record<R>(resolver: &R, name: &str) -> Result<Option<ContentRecord>>
where
    R: ResolverContract + ?Sized,
{
    let is_eip1577 = resolver.supports_interface(RESOLVER_EIP1577_INTERFACE).await?;
    let is_legacy = resolver.supports_interface(RESOLVER_LEGACY_INTERFACE).await?;

    let (interface, function) = if is_eip1577 {
        (ContentInterface::Eip1577, CONTENTHASH_FUNCTION)
    } else if is_legacy {
        (ContentInterface::Legacy, LEGACY_CONTENT_FUNCTION)
    } else {
        return Err(EnsError::NonStandardResolver(
            "Resolver should either support contenthash() or content()".into(),
        ));
    };

    let node = namehash(name);
    let raw = resolver.call_record(function, node).await?;

    if is_none_or_zero_address(Some(raw.as_slice())) {
        debug!(%node, ?interface, "Content record unset");
        return Ok(None);
    }

    Ok(Some(ContentRecord { interface, raw }))
}

// ═══════════════════════════════════════════════════════════════════════════════
// IN-MEMORY RESOLVER
// ═══════════════════════════════════════════════════════════════════════════════

/// In-memory resolver contract.
///
/// Serves records from concurrent maps, for tests and offline use. Unset
/// records read back as empty data, like a live resolver returning zeros.
#[derive(Debug, Default)]
pub struct MemoryResolver {
    /// (function, node) → record bytes
    records: DashMap<(String, Node), Vec<u8>>,
    /// Supported ERC-165 interface IDs
    interfaces: DashSet<[u8; 4]>,
}

impl MemoryResolver {
    /// Creates an empty resolver that supports no interfaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an interface as supported.
    pub fn add_interface(&self, interface_id: [u8; 4]) {
        self.interfaces.insert(interface_id);
    }

    /// Stores a record under a node.
    pub fn set_record(&self, function: &str, node: Node, data: Vec<u8>) {
        self.records.insert((function.to_string(), node), data);
    }

    /// Stores a record under the namehash of an already normalized name.
    pub fn set_record_for_name(&self, function: &str, name: &str, data: Vec<u8>) {
        self.set_record(function, namehash(name), data);
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ResolverContract for MemoryResolver {
    async fn supports_interface(&self, interface_id: [u8; 4]) -> Result<bool> {
        Ok(self.interfaces.contains(&interface_id))
    }

    async fn call_record(&self, function: &str, node: Node) -> Result<Vec<u8>> {
        Ok(self
            .records
            .get(&(function.to_string(), node))
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
