//! Error types for ensname.
//!
//! A single `thiserror` enum covers every failure. Normalization and hashing
//! are pure, so none of their errors is worth retrying.

use thiserror::Error;

/// Result type alias using `EnsError`.
pub type Result<T> = std::result::Result<T, EnsError>;

/// Main error type for all ensname operations.
#[derive(Debug, Error)]
pub enum EnsError {
    // ═══════════════════════════════════════════════════════════════════════════
    // NAME ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// The name failed UTS-46 processing or UTF-8 decoding.
    #[error("{name} is an invalid name, because {reason}")]
    InvalidName {
        /// The offending input, lossily rendered if it was not UTF-8
        name: String,
        /// What the normalizer rejected
        reason: String,
    },

    /// Caller misuse, such as hashing a dotted string as a single label.
    #[error("Validation error: {0}")]
    ValidationError(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // ADDRESS ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// Address with the wrong length.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid hex encoding.
    #[error("Invalid hex encoding: {0}")]
    HexError(#[from] hex::FromHexError),

    // ═══════════════════════════════════════════════════════════════════════════
    // RESOLVER ERRORS
    // ═══════════════════════════════════════════════════════════════════════════
    /// Resolver implements neither `contenthash()` nor `content()`.
    #[error("Non-standard resolver: {0}")]
    NonStandardResolver(String),

    /// The underlying contract call failed.
    #[error("Contract call failed: {0}")]
    ContractCallFailed(String),
}

impl EnsError {
    /// Builds an [`EnsError::InvalidName`].
    pub fn invalid_name(name: impl Into<String>, reason: impl ToString) -> Self {
        EnsError::InvalidName {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if this error came from name normalization.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, EnsError::InvalidName { .. })
    }

    /// Returns true if this error is caller input or misuse.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            EnsError::InvalidName { .. }
                | EnsError::ValidationError(_)
                | EnsError::InvalidAddress(_)
                | EnsError::HexError(_)
        )
    }

    /// Returns true if retrying could succeed.
    ///
    /// Only contract calls touch the outside world.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EnsError::ContractCallFailed(_))
    }
}
