//! Wire codec for whitelist gate instructions.
//!
//! Encoding: one discriminant byte followed by the operation payload.
//! Initialize and UpdateRoot carry a 32-byte root; Action carries the leaf
//! index (8 bytes, big-endian) followed by the concatenated sibling hashes.
//! Trailing bytes beyond a fixed-size payload are ignored; the proof tail of
//! Action is validated by the verifier, not here.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WhitelistError};
use crate::proof::{Hash, HASH_SIZE};

/// Discriminant for [`WhitelistInstruction::Initialize`].
const TAG_INITIALIZE: u8 = 0;
/// Discriminant for [`WhitelistInstruction::UpdateRoot`].
const TAG_UPDATE_ROOT: u8 = 1;
/// Discriminant for [`WhitelistInstruction::Action`].
const TAG_ACTION: u8 = 2;

/// Size of the big-endian leaf index in an Action payload.
const INDEX_SIZE: usize = 8;

/// The three operations the gate accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhitelistInstruction {
    /// Create the whitelist record with an initial root; the signer becomes
    /// the authority.
    Initialize { root: Hash },
    /// Replace the committed root. The signer must be the stored authority.
    UpdateRoot { new_root: Hash },
    /// Prove the signer's membership and perform the gated action. `proof`
    /// is the concatenated sibling hashes of the signer's inclusion path.
    Action { proof: Vec<u8>, index: u64 },
}

impl WhitelistInstruction {
    /// Encode the instruction to bytes.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Initialize { root } => {
                let mut bytes = Vec::with_capacity(1 + HASH_SIZE);
                bytes.push(TAG_INITIALIZE);
                bytes.extend_from_slice(root);
                bytes
            }
            Self::UpdateRoot { new_root } => {
                let mut bytes = Vec::with_capacity(1 + HASH_SIZE);
                bytes.push(TAG_UPDATE_ROOT);
                bytes.extend_from_slice(new_root);
                bytes
            }
            Self::Action { proof, index } => {
                let mut bytes = Vec::with_capacity(1 + INDEX_SIZE + proof.len());
                bytes.push(TAG_ACTION);
                bytes.extend_from_slice(&index.to_be_bytes());
                bytes.extend_from_slice(proof);
                bytes
            }
        }
    }

    /// Decode an instruction from bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let (&tag, payload) = bytes
            .split_first()
            .ok_or(WhitelistError::TruncatedInstruction)?;

        match tag {
            TAG_INITIALIZE => Ok(Self::Initialize {
                root: read_hash(payload)?,
            }),
            TAG_UPDATE_ROOT => Ok(Self::UpdateRoot {
                new_root: read_hash(payload)?,
            }),
            TAG_ACTION => {
                if payload.len() < INDEX_SIZE {
                    return Err(WhitelistError::TruncatedInstruction);
                }
                let mut index_bytes = [0u8; INDEX_SIZE];
                index_bytes.copy_from_slice(&payload[..INDEX_SIZE]);
                Ok(Self::Action {
                    proof: payload[INDEX_SIZE..].to_vec(),
                    index: u64::from_be_bytes(index_bytes),
                })
            }
            other => Err(WhitelistError::InvalidInstruction(other)),
        }
    }
}

fn read_hash(payload: &[u8]) -> Result<Hash> {
    if payload.len() < HASH_SIZE {
        return Err(WhitelistError::TruncatedInstruction);
    }
    let mut hash = [0u8; HASH_SIZE];
    hash.copy_from_slice(&payload[..HASH_SIZE]);
    Ok(hash)
}
