//! Keccak-256 hashing

use ethcall_primitives::H256;
use sha3::{Digest, Keccak256};

/// Compute Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    H256::from_bytes(hasher.finalize().into())
}

/// A deterministic, side-effect-free 32-byte digest.
///
/// Implementations must be safe to call concurrently from any thread.
pub trait Hasher: Send + Sync {
    /// Hash `data` into a 32-byte digest
    fn digest(&self, data: &[u8]) -> H256;
}

/// The Keccak-256 hasher used for Ethereum function selectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256Hasher;

impl Hasher for Keccak256Hasher {
    fn digest(&self, data: &[u8]) -> H256 {
        keccak256(data)
    }
}

impl<H: Hasher + ?Sized> Hasher for &H {
    fn digest(&self, data: &[u8]) -> H256 {
        (**self).digest(data)
    }
}
