//! Namehash computation (EIP-137).
//!
//! A name's node is built by folding its labels right to left, starting
//! from the root node:
//!
//! ```text
//! namehash("")          = 0x00..00
//! namehash(label.rest)  = keccak256(namehash(rest) || keccak256(label))
//! ```
//!
//! Nothing here normalizes. Callers hash names that already went through
//! [`crate::normalize`], or deliberately hash non-standard labels.

use tracing::debug;

use ensname_core::constants::LABEL_SEPARATOR;
use ensname_core::error::{EnsError, Result};
use ensname_core::types::{Hash256, Node};
use ensname_crypto::{keccak256_concat, keccak256_text};

use crate::normalize::normalize;

/// Hashes a single label.
///
/// Labels are atomic: a string containing `.` is a name, and passing one
/// here is an [`EnsError::ValidationError`]. The empty label is accepted and
/// hashes to Keccak-256 of the empty string.
pub fn label_hash(label: &str) -> Result<Hash256> {
    if label.contains(LABEL_SEPARATOR) {
        return Err(EnsError::ValidationError(format!(
            "Cannot generate hash for label {:?} with a '{}'",
            label, LABEL_SEPARATOR
        )));
    }
    Ok(keccak256_text(label))
}

/// Derives the node of `label` directly under `parent`.
pub fn subnode(parent: Node, label: &str) -> Result<Node> {
    let label_hash = label_hash(label)?;
    Ok(fold(parent, label_hash))
}

/// Computes the namehash of an already normalized name.
///
/// The empty name is the root and maps to [`Hash256::EMPTY`]. Empty labels
/// from leading, trailing, or doubled dots are hashed like any other label.
pub fn namehash(name: &str) -> Node {
    if name.is_empty() {
        return Hash256::EMPTY;
    }

    // rsplit yields labels TLD first and never contains the separator.
    name.rsplit(LABEL_SEPARATOR)
        .fold(Hash256::EMPTY, |node, label| fold(node, keccak256_text(label)))
}

/// Normalizes `name` and returns its namehash.
///
/// Fails with [`EnsError::InvalidName`] exactly when [`normalize`] fails.
pub fn raw_name_to_hash(name: &str) -> Result<Node> {
    let normalized = normalize(name)?;
    let node = namehash(&normalized);
    debug!(name, normalized = %normalized, %node, "Computed namehash");
    Ok(node)
}

fn fold(node: Node, label_hash: Hash256) -> Node {
    keccak256_concat(&[&node.as_bytes()[..], &label_hash.as_bytes()[..]])
}
