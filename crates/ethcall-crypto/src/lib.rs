//! # ethcall-crypto
//!
//! Hash provider for the ABI codec.
//!
//! Only Keccak-256 lives here. It is the original Keccak padding used by
//! Ethereum, not the NIST SHA3-256 variant; the two produce different digests.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::{keccak256, Hasher, Keccak256Hasher};
