//! merkle-whitelist
//!
//! An access-control gate that admits only members of a large, dynamic set
//! without storing the set itself. Membership is committed as a single
//! 32-byte Merkle root held in a singleton record; individual callers prove
//! membership by presenting the sibling path of their own identity's leaf,
//! which the gate recomputes against the committed root.
//!
//! # Components
//!
//! - [`proof`]: the pure inclusion-proof verifier and the Keccak-256 leaf
//!   and node hashes it is defined over.
//! - [`state`]: the persisted record (`root` + `authority`), its fixed
//!   64-byte layout, and the deterministic singleton address derivation.
//! - [`instruction`]: the wire codec for the three operations.
//! - [`processor`]: the instruction handlers: Initialize creates the
//!   record, UpdateRoot replaces the root (authority only), Action admits a
//!   signer iff their proof reconstructs the stored root.
//!
//! # Storage contract
//!
//! The surrounding runtime owns persistence: it loads the record's bytes
//! from the address given by [`state::state_address`], hands them to a
//! handler together with the verified transaction signer, and atomically
//! commits whatever bytes the handler returns. Handlers never mutate
//! anything in place, so a failed operation has no effect.

pub mod error;
pub mod instruction;
pub mod processor;
pub mod proof;
pub mod state;

pub use error::{Result, WhitelistError};
pub use instruction::WhitelistInstruction;
pub use proof::{hash_leaf, hash_node, verify_member, Hash, InclusionProof, HASH_SIZE};
pub use state::{state_address, Identity, WhitelistState, STATE_LEN, STATE_SEED};
