//! Ethereum-compatible address type (20 bytes)

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::hex::{decode_prefixed, encode_prefixed};

/// Address parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// Ethereum-compatible 20-byte address
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    /// Size of address in bytes
    pub const LEN: usize = 20;

    /// Zero address (0x0000...0000)
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create address from bytes
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }

    /// Create address from slice.
    ///
    /// The slice must hold exactly 20 bytes; shorter or longer input is
    /// rejected rather than padded or truncated.
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        let bytes: [u8; 20] = slice
            .try_into()
            .map_err(|_| AddressError::InvalidLength(slice.len()))?;
        Ok(Address(bytes))
    }

    /// Parse address from hex string (with or without 0x prefix)
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let bytes = decode_prefixed(s).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get as byte array
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Convert to hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        encode_prefixed(self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Address(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(slice)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d";

    // ==================== Parsing ====================

    #[test]
    fn test_address_from_hex() {
        let addr = Address::from_hex(SAMPLE).unwrap();
        assert_eq!(addr.as_bytes()[0], 0x74);
        assert_eq!(addr.as_bytes()[19], 0x3d);

        let unprefixed = Address::from_hex(&SAMPLE[2..]).unwrap();
        assert_eq!(addr, unprefixed);
    }

    #[test]
    fn test_address_from_hex_case_insensitive() {
        let lower = Address::from_hex(&SAMPLE.to_lowercase()).unwrap();
        let upper = Address::from_hex(&SAMPLE.to_uppercase().replacen("0X", "0x", 1)).unwrap();
        let mixed = Address::from_hex(SAMPLE).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_address_from_str() {
        let addr: Address = SAMPLE.parse().unwrap();
        assert_eq!(addr.to_hex(), SAMPLE.to_lowercase());
    }

    #[test]
    fn test_address_from_hex_invalid_chars() {
        let result = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aGGG");
        assert!(matches!(result, Err(AddressError::InvalidHex(_))));
    }

    // ==================== Length boundaries ====================

    #[test]
    fn test_address_from_slice_19_bytes() {
        assert_eq!(
            Address::from_slice(&[0u8; 19]),
            Err(AddressError::InvalidLength(19))
        );
    }

    #[test]
    fn test_address_from_slice_21_bytes() {
        assert_eq!(
            Address::from_slice(&[0u8; 21]),
            Err(AddressError::InvalidLength(21))
        );
    }

    #[test]
    fn test_address_from_slice_empty() {
        assert_eq!(Address::from_slice(&[]), Err(AddressError::InvalidLength(0)));
        assert_eq!(Address::from_hex("0x"), Err(AddressError::InvalidLength(0)));
    }

    #[test]
    fn test_address_from_slice_exact() {
        let bytes = [0xab; 20];
        let addr = Address::try_from(&bytes[..]).unwrap();
        assert_eq!(addr.as_bytes(), &bytes);
    }

    // ==================== Formatting ====================

    #[test]
    fn test_zero_address() {
        assert_eq!(Address::default(), Address::ZERO);
        assert_eq!(
            Address::ZERO.to_hex(),
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_address_display_and_debug() {
        let addr = Address::from_hex(SAMPLE).unwrap();
        assert_eq!(format!("{}", addr), SAMPLE.to_lowercase());
        assert_eq!(
            format!("{:?}", addr),
            format!("Address({})", SAMPLE.to_lowercase())
        );
    }
}
