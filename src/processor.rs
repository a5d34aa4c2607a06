//! Instruction handlers: the three state transitions of the whitelist gate.
//!
//! Storage is an explicit collaborator. The runtime resolves the record
//! address (see [`crate::state::state_address`]), passes the record's
//! current bytes into a handler together with the verified transaction
//! signer, and persists whatever bytes the handler returns. Handlers build
//! the replacement record only after every check passes, so a failure never
//! leaves a partial write behind.
//!
//! The gated effect of [`action`] belongs to the calling application: an
//! `Ok` return means the signer proved membership and the effect may
//! proceed; any error means it must not.

use tracing::debug;

use crate::error::{Result, WhitelistError};
use crate::instruction::WhitelistInstruction;
use crate::proof::{hash_leaf, Hash, InclusionProof};
use crate::state::{Identity, WhitelistState, STATE_LEN};

/// Create the singleton record with the given root; the signer becomes the
/// authority.
///
/// `existing` is whatever the runtime currently holds at the record address.
/// Any non-empty contents mean the whitelist was already created and the
/// call fails with [`WhitelistError::AlreadyInitialized`], whether or not
/// those contents still decode as a record.
pub fn initialize(
    existing: Option<&[u8]>,
    signer: &Identity,
    root: Hash,
) -> Result<[u8; STATE_LEN]> {
    if existing.is_some_and(|bytes| !bytes.is_empty()) {
        return Err(WhitelistError::AlreadyInitialized);
    }

    let state = WhitelistState::new(root, *signer);
    debug!(
        "whitelist initialized: root {}, authority {}",
        hex::encode(root),
        hex::encode(signer)
    );
    Ok(state.to_bytes())
}

/// Replace the committed root. The signer must be the stored authority.
pub fn update_root(account: &[u8], signer: &Identity, new_root: Hash) -> Result<[u8; STATE_LEN]> {
    if account.is_empty() {
        return Err(WhitelistError::UninitializedState);
    }

    let mut state = WhitelistState::from_bytes(account)?;
    state.update_root(signer, new_root)?;
    debug!("root replaced: {}", hex::encode(new_root));
    Ok(state.to_bytes())
}

/// Admit the signer iff the proof places the signer's leaf under the stored
/// root.
///
/// The leaf is derived from the signer identity the runtime verified, never
/// from an address carried inside the proof, so a member's proof presented
/// by anyone else reconstructs a different leaf and fails. The record is
/// only read; nothing is persisted.
pub fn action(account: &[u8], signer: &Identity, proof_bytes: &[u8], index: u64) -> Result<()> {
    if account.is_empty() {
        return Err(WhitelistError::UninitializedState);
    }

    let state = WhitelistState::from_bytes(account)?;
    let proof = InclusionProof::from_bytes(proof_bytes, index)?;
    let leaf = hash_leaf(signer);

    if !proof.verify(&leaf, &state.root) {
        debug!("membership rejected: signer {}", hex::encode(signer));
        return Err(WhitelistError::InvalidProof);
    }

    debug!("membership admitted: signer {}", hex::encode(signer));
    Ok(())
}

/// Dispatch a decoded instruction against the record's current bytes.
///
/// Returns the bytes the runtime must persist at the record address, or
/// `None` when the instruction leaves the record untouched (Action).
pub fn process(
    instruction: &WhitelistInstruction,
    signer: &Identity,
    account: Option<&[u8]>,
) -> Result<Option<[u8; STATE_LEN]>> {
    match instruction {
        WhitelistInstruction::Initialize { root } => {
            initialize(account, signer, *root).map(Some)
        }
        WhitelistInstruction::UpdateRoot { new_root } => {
            let bytes = account.ok_or(WhitelistError::UninitializedState)?;
            update_root(bytes, signer, *new_root).map(Some)
        }
        WhitelistInstruction::Action { proof, index } => {
            let bytes = account.ok_or(WhitelistError::UninitializedState)?;
            action(bytes, signer, proof, *index).map(|_| None)
        }
    }
}
