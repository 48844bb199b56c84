//! # ethcall-primitives
//!
//! Primitive types shared by the ethcall crates.
//!
//! - `Address`: 20-byte account address
//! - `H256`: 32-byte digest produced by the hash provider
//! - `U256`: 256-bit unsigned integer (re-exported from `primitive-types`)
//! - `0x`-prefixed hex conversion used at the transport boundary

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;
pub mod hex;

pub use address::{Address, AddressError};
pub use hash::H256;
pub use hex::HexError;

// Re-export primitive-types for U256
pub use primitive_types::U256;
