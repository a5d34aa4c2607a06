//! Error types for the whitelist gate.

use thiserror::Error;

/// Result type alias for whitelist gate operations
pub type Result<T> = std::result::Result<T, WhitelistError>;

/// Errors surfaced by the whitelist gate.
///
/// `InvalidProof` and `AuthorityMismatch` are the two domain failures a
/// caller can hit through the normal operation surface; both are terminal for
/// the inputs that produced them. The remaining variants cover lifecycle
/// misuse and wire-level decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WhitelistError {
    /// The proof does not reconstruct the stored root. Covers forged
    /// membership, proofs gone stale after a root update, proofs bound to a
    /// different identity, and wire proofs of invalid length. There is no
    /// separate "malformed proof" outcome.
    #[error("invalid merkle proof")]
    InvalidProof,

    /// The signer attempting a root update is not the stored authority.
    #[error("signer is not the whitelist authority")]
    AuthorityMismatch,

    /// Initialize was called against an address that already holds a record.
    #[error("whitelist state already initialized")]
    AlreadyInitialized,

    /// UpdateRoot or Action was called before the record exists.
    #[error("whitelist state not initialized")]
    UninitializedState,

    /// The persisted record is not exactly the fixed record length.
    #[error("state record has invalid length: {0}")]
    StateLength(usize),

    /// Unknown instruction discriminant byte.
    #[error("unknown instruction discriminant: {0}")]
    InvalidInstruction(u8),

    /// Instruction payload shorter than its fixed prefix.
    #[error("instruction payload too short")]
    TruncatedInstruction,
}
