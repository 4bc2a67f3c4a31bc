//! Keccak-256 hashing

use relay_primitives::Word;
use sha3::{Digest, Keccak256};

/// Compute the Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> Word {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    Word::from_bytes(hasher.finalize().into())
}
