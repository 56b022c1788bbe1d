//! # ensname ENS
//!
//! Turns human-readable ENS names into the 32-byte nodes that index every
//! on-chain ENS record.
//!
//! ```text
//! raw name ──normalize──▶ normalized name ──namehash──▶ node
//! ```
//!
//! Normalization and hashing are deliberately separate steps: [`namehash`]
//! trusts its input and never normalizes, [`raw_name_to_hash`] does both.
//!
//! ## Example
//!
//! ```rust
//! use ensname_ens::{namehash, normalize, raw_name_to_hash};
//!
//! let name = normalize("Foo.ETH").unwrap();
//! assert_eq!(name, "foo.eth");
//! assert_eq!(raw_name_to_hash("Foo.ETH").unwrap(), namehash(&name));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod namehash;
pub mod normalize;
pub mod records;
pub mod reverse;

pub use namehash::{label_hash, namehash, raw_name_to_hash, subnode};
pub use normalize::{is_valid_name, normalize, normalize_bytes, Normalizer, NormalizerConfig};
pub use records::{
    resolve_content_record, resolve_other_record, ContentInterface, ContentRecord, MemoryResolver,
};
pub use reverse::{address_in, address_to_reverse_domain, is_none_or_zero_address, reverse_node};
