//! `0x`-prefixed hex conversion
//!
//! The codec works on raw bytes; these helpers sit at the boundary where
//! payloads travel as JSON-RPC `data` strings.

use thiserror::Error;

/// Hex decoding error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// Input is not valid hexadecimal
    #[error("invalid hex string: {0}")]
    Invalid(String),
}

/// Encode bytes as a lowercase `0x`-prefixed hex string
pub fn encode_prefixed(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode a hex string, with or without the `0x` prefix
pub fn decode_prefixed(s: &str) -> Result<Vec<u8>, HexError> {
    let s = s.trim();
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(s).map_err(|e| HexError::Invalid(e.to_string()))
}
