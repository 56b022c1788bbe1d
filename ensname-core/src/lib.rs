//! # ensname Core
//!
//! Core types, errors, and traits shared by the ensname crates.
//!
//! - **Types**: [`Hash256`] (the namehash node) and [`EthAddress`]
//! - **Errors**: [`EnsError`] with a crate-wide [`Result`] alias
//! - **Constants**: the root node, reverse registrar domain, resolver interface IDs
//! - **Traits**: the [`ResolverContract`] seam to whatever calls resolver contracts
//!
//! ## Example
//!
//! ```rust
//! use ensname_core::{Hash256, EMPTY_NODE};
//!
//! let root = Hash256::EMPTY;
//! assert_eq!(root.as_bytes(), &EMPTY_NODE);
//! assert_eq!(root.to_string(), format!("0x{}", "00".repeat(32)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{EnsError, Result};
pub use traits::*;
pub use types::*;
