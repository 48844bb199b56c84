//! # ethcall-abi
//!
//! Ethereum contract ABI encoding for function calls and decoding of return
//! values.
//!
//! - **Typed values** ([`AbiValue`]): each variant knows its canonical type
//!   name and renders into a head word and tail bytes
//! - **Call codec** ([`CallCodec`]): selector derivation, head/tail assembly
//!   with tail offsets, and word-by-word decoding of static return values
//! - **Function descriptors** ([`Function`]): a known interface entry that
//!   checks arguments before encoding
//!
//! Decoding covers static return types only. Dynamic return types (`bytes`,
//! `string`, `T[]`) fail with [`AbiError::UnsupportedOperation`].
//!
//! # Example
//!
//! ```rust
//! use ethcall_abi::{encode_function_call, decode, AbiType, AbiValue};
//! use ethcall_primitives::U256;
//!
//! // baz(uint32,bool) with (69, true)
//! let data = encode_function_call("baz", &[AbiValue::uint32(69), AbiValue::bool(true)]);
//! assert_eq!(&data[..4], &[0xcd, 0xcd, 0x77, 0xc0]);
//! assert_eq!(data.len(), 4 + 64);
//!
//! // Decode a uint256 return value
//! let mut return_data = [0u8; 32];
//! return_data[31] = 42;
//! let values = decode(&return_data, &[AbiType::Uint(256)]).unwrap();
//! assert_eq!(values[0].as_uint(), Some(U256::from(42)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codec;
mod decode;
mod encode;
mod error;
mod function;
mod parse;
mod types;
mod value;
pub mod word;

pub use codec::{encode_function_call, function_selector, CallCodec, Selector};
pub use decode::decode;
pub use encode::{encode_params, place, signature, Placement};
pub use error::AbiError;
pub use function::Function;
pub use parse::{parse_value, parse_values};
pub use types::{parse_type_list, AbiType};
pub use value::{AbiValue, Array, FixedBytes, Uint};

// Re-export primitives for convenience
pub use ethcall_primitives::{Address, H256, U256};
