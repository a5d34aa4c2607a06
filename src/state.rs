//! Whitelist state: the single persisted record holding the committed root
//! and the authority permitted to replace it.
//!
//! Exactly one record exists per deployment. Its address is not user-chosen:
//! it is derived from the constant seed [`STATE_SEED`] and the hosting
//! program's identity, so every party resolves the same canonical instance.
//! The record is world-readable; only the stored authority may rewrite the
//! root, and nothing within the gate ever deletes it.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::error::{Result, WhitelistError};
use crate::proof::{Hash, HASH_SIZE};

/// Seed tag for deriving the singleton record address.
pub const STATE_SEED: &[u8] = b"whitelist";

/// Persisted size of a whitelist record: root followed by authority.
pub const STATE_LEN: usize = 2 * HASH_SIZE;

/// Raw identity bytes of a member, signer, or authority.
pub type Identity = [u8; 32];

/// The persisted whitelist record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistState {
    /// Merkle root committing to the current membership set.
    pub root: Hash,
    /// Identity permitted to replace the root.
    pub authority: Identity,
}

impl WhitelistState {
    /// Construct a record with the given root and authority.
    pub fn new(root: Hash, authority: Identity) -> Self {
        Self { root, authority }
    }

    /// Replace the committed root.
    ///
    /// Only the stored authority may do this; any other caller gets
    /// [`WhitelistError::AuthorityMismatch`] and the record is untouched.
    /// The authority itself never changes here.
    pub fn update_root(&mut self, caller: &Identity, new_root: Hash) -> Result<()> {
        if *caller != self.authority {
            return Err(WhitelistError::AuthorityMismatch);
        }
        self.root = new_root;
        Ok(())
    }

    /// Serialize to the fixed 64-byte persisted layout.
    pub fn to_bytes(&self) -> [u8; STATE_LEN] {
        let mut bytes = [0u8; STATE_LEN];
        bytes[..HASH_SIZE].copy_from_slice(&self.root);
        bytes[HASH_SIZE..].copy_from_slice(&self.authority);
        bytes
    }

    /// Parse the fixed persisted layout. Any other length means the stored
    /// record is corrupt and is surfaced as [`WhitelistError::StateLength`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != STATE_LEN {
            return Err(WhitelistError::StateLength(bytes.len()));
        }

        let mut root = [0u8; HASH_SIZE];
        root.copy_from_slice(&bytes[..HASH_SIZE]);

        let mut authority = [0u8; HASH_SIZE];
        authority.copy_from_slice(&bytes[HASH_SIZE..]);

        Ok(Self { root, authority })
    }
}

/// Derive the deterministic address of the singleton record for a program.
///
/// `keccak256(STATE_SEED || program_id)`: fixed tag plus the hosting
/// program's own identity, so the location is canonical per deployment.
pub fn state_address(program_id: &Identity) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(STATE_SEED);
    hasher.update(program_id);
    hasher.finalize().into()
}
