//! Inclusion-proof verification against a committed Merkle root.
//!
//! The verifier recomputes a candidate root from a leaf, an ordered sibling
//! list, and a position index, then compares it byte-for-byte against the
//! committed root. It is pure and total: any sibling count and any index
//! produce *some* candidate root, so a truncated proof, an oversized proof,
//! a wrong-order proof, and an outright forgery are all indistinguishable:
//! each simply fails to reconstruct the expected value.
//!
//! Sibling-order convention (the wire contract with whatever built the
//! tree): bit `i` of the index, least-significant bit first, gives the side
//! of the *running hash* when combined with `siblings[i]`. A 0 bit means
//! the running hash is the left operand, a 1 bit means it is the right.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::error::{Result, WhitelistError};

/// Size of a Keccak-256 hash in bytes.
pub const HASH_SIZE: usize = 32;

/// A 32-byte Keccak-256 hash: a leaf, an interior node, or the committed root.
pub type Hash = [u8; HASH_SIZE];

/// Hash raw identity bytes into a tree leaf.
pub fn hash_leaf(identity: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(identity);
    hasher.finalize().into()
}

/// Hash two sibling nodes into their parent, left operand first.
pub fn hash_node(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// An inclusion proof: the sibling hashes along the path from a leaf to the
/// root, lowest tree level first, plus the leaf's position in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionProof {
    /// Sibling hashes, one per tree level.
    pub siblings: Vec<Hash>,
    /// Leaf position. Bit `i` (LSB first) selects the concatenation side at
    /// level `i`.
    pub index: u64,
}

impl InclusionProof {
    /// Create a proof from an ordered sibling list and a leaf index.
    pub fn new(siblings: Vec<Hash>, index: u64) -> Self {
        Self { siblings, index }
    }

    /// Parse the wire form: concatenated 32-byte sibling hashes.
    ///
    /// A byte string whose length is not a multiple of 32 cannot be a
    /// sibling list and resolves to [`WhitelistError::InvalidProof`], the
    /// same outcome a forged proof gets.
    pub fn from_bytes(bytes: &[u8], index: u64) -> Result<Self> {
        if bytes.len() % HASH_SIZE != 0 {
            return Err(WhitelistError::InvalidProof);
        }

        let mut siblings = Vec::with_capacity(bytes.len() / HASH_SIZE);
        for chunk in bytes.chunks_exact(HASH_SIZE) {
            let mut sibling = [0u8; HASH_SIZE];
            sibling.copy_from_slice(chunk);
            siblings.push(sibling);
        }

        Ok(Self { siblings, index })
    }

    /// Serialize to the wire form: concatenated sibling hashes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.siblings.len() * HASH_SIZE);
        for sibling in &self.siblings {
            bytes.extend_from_slice(sibling);
        }
        bytes
    }

    /// Recompute the candidate root starting from `leaf`.
    ///
    /// Exactly `siblings.len()` index bits are consumed; higher bits are
    /// never read, so an index with extra high bits set folds to the same
    /// candidate root as the masked index. An empty sibling list returns the
    /// leaf itself.
    pub fn root(&self, leaf: &Hash) -> Hash {
        let mut current = *leaf;
        let mut index = self.index;
        for sibling in &self.siblings {
            current = if index & 1 == 0 {
                hash_node(&current, sibling)
            } else {
                hash_node(sibling, &current)
            };
            index >>= 1;
        }
        current
    }

    /// True iff the proof reconstructs `expected_root` from `leaf`.
    pub fn verify(&self, leaf: &Hash, expected_root: &Hash) -> bool {
        self.root(leaf) == *expected_root
    }
}

/// Check membership of raw identity bytes under `root`.
///
/// Derives the leaf from `identity` and verifies the proof against it. The
/// caller is responsible for passing the identity that actually signed the
/// enclosing transaction; see [`crate::processor::action`].
pub fn verify_member(identity: &[u8], proof: &InclusionProof, root: &Hash) -> bool {
    proof.verify(&hash_leaf(identity), root)
}
