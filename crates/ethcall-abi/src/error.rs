//! ABI error types

use thiserror::Error;

/// ABI encoding/decoding error.
///
/// Every variant is a programming fault (a mismatch between the caller and the
/// contract interface), never a transient condition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AbiError {
    /// Value out of range or of the wrong sign for its type
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Fixed-size type given the wrong number of source bytes
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Required byte count
        expected: usize,
        /// Byte count supplied
        got: usize,
    },

    /// Decode buffer ran out before the current slot was read
    #[error("truncated input: need {needed} bytes at offset {offset}, {remaining} remaining")]
    TruncatedInput {
        /// Cursor position of the slot
        offset: usize,
        /// Bytes the slot requires
        needed: usize,
        /// Bytes left in the buffer
        remaining: usize,
    },

    /// Operation outside the codec's scope (dynamic types on the decode path)
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Unrecognised canonical type name
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// Malformed function signature
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Arguments do not match a function's declared inputs
    #[error("argument mismatch: {0}")]
    ArgumentMismatch(String),

    /// Calldata addressed to a different function
    #[error("selector mismatch: expected {expected}, got {got}")]
    SelectorMismatch {
        /// Selector of the function being decoded
        expected: String,
        /// Selector found in the calldata
        got: String,
    },
}
