//! CLI error types

use ethcall_abi::AbiError;
use ethcall_primitives::HexError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// ABI encoding/decoding error
    #[error("ABI error: {0}")]
    Abi(#[from] AbiError),

    /// Invalid hex string
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config error
    #[error("Config error: {0}")]
    Config(String),
}

impl From<HexError> for CliError {
    fn from(e: HexError) -> Self {
        CliError::InvalidHex(e.to_string())
    }
}
