//! Shared test support: a Keccak-256 Merkle tree builder producing
//! (leaf, siblings, index) triples, and a minimal in-memory runtime that
//! stands in for the surrounding transaction/account machinery.

use std::collections::HashMap;

use merkle_whitelist::{
    hash_leaf, processor, state_address, Hash, Identity, InclusionProof, Result, WhitelistInstruction,
    WhitelistState,
};

/// Deterministic 32-byte identity for member `i`.
pub fn member_key(i: u64) -> Identity {
    let mut key = [0u8; 32];
    key[..8].copy_from_slice(&i.to_be_bytes());
    key[31] = 0x4d;
    key
}

/// Merkle tree over member identities, hashed the same way the gate hashes:
/// leaves are `keccak256(identity)`, parents are `keccak256(left || right)`.
/// Odd levels duplicate their last node, so every position has a sibling at
/// every level.
pub struct TestTree {
    leaves: Vec<Hash>,
}

impl TestTree {
    pub fn from_members(members: &[Identity]) -> Self {
        Self {
            leaves: members.iter().map(|m| hash_leaf(m)).collect(),
        }
    }

    pub fn add_member(&mut self, member: &Identity) {
        self.leaves.push(hash_leaf(member));
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn root(&self) -> Hash {
        assert!(!self.leaves.is_empty(), "tree needs at least one leaf");
        let mut level = self.leaves.clone();
        while level.len() > 1 {
            level = next_level(level);
        }
        level[0]
    }

    /// Inclusion proof for the member at `index`.
    pub fn proof(&self, index: usize) -> InclusionProof {
        assert!(index < self.leaves.len(), "index out of range");

        let mut siblings = Vec::new();
        let mut level = self.leaves.clone();
        let mut position = index;
        while level.len() > 1 {
            if level.len() % 2 == 1 {
                level.push(*level.last().unwrap());
            }
            siblings.push(level[position ^ 1]);
            level = paired(level);
            position >>= 1;
        }

        InclusionProof::new(siblings, index as u64)
    }
}

fn next_level(mut level: Vec<Hash>) -> Vec<Hash> {
    if level.len() % 2 == 1 {
        level.push(*level.last().unwrap());
    }
    paired(level)
}

fn paired(level: Vec<Hash>) -> Vec<Hash> {
    level
        .chunks(2)
        .map(|pair| merkle_whitelist::hash_node(&pair[0], &pair[1]))
        .collect()
}

/// In-memory stand-in for the runtime: resolves the singleton address, feeds
/// account bytes through the processor, and commits returned bytes only on
/// success.
pub struct TestRuntime {
    program_id: Identity,
    accounts: HashMap<Hash, Vec<u8>>,
}

impl TestRuntime {
    pub fn new(program_id: Identity) -> Self {
        Self {
            program_id,
            accounts: HashMap::new(),
        }
    }

    /// Decode and execute one instruction as `signer`, committing the
    /// resulting record bytes if the handler succeeds.
    pub fn submit(&mut self, signer: &Identity, instruction_bytes: &[u8]) -> Result<()> {
        let instruction = WhitelistInstruction::decode(instruction_bytes)?;
        let address = state_address(&self.program_id);
        let account = self.accounts.get(&address).map(Vec::as_slice);

        if let Some(bytes) = processor::process(&instruction, signer, account)? {
            self.accounts.insert(address, bytes.to_vec());
        }
        Ok(())
    }

    /// The currently persisted whitelist record, if any.
    pub fn state(&self) -> Option<WhitelistState> {
        let address = state_address(&self.program_id);
        self.accounts
            .get(&address)
            .map(|bytes| WhitelistState::from_bytes(bytes).expect("persisted record decodes"))
    }
}
