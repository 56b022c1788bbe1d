//! # ensname Cryptography
//!
//! Keccak-256, the only hash function ENS uses for names.
//!
//! ## Example
//!
//! ```rust
//! use ensname_crypto::{keccak256, keccak256_text};
//!
//! assert_eq!(keccak256(b"eth"), keccak256_text("eth"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod hash;

// Re-export main functions at crate root
pub use hash::{keccak256, keccak256_concat, keccak256_text};
