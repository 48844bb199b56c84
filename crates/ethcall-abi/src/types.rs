//! ABI type definitions

use std::fmt;
use std::str::FromStr;

use crate::AbiError;

/// Solidity parameter types understood by the codec.
///
/// Also used as the expected shape of a return slot when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbiType {
    /// Boolean
    Bool,
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Address
    Address,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// Dynamic bytes
    Bytes,
    /// UTF-8 string
    String,
    /// Dynamic array
    Array(Box<AbiType>),
}

impl AbiType {
    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        matches!(self, AbiType::Bytes | AbiType::String | AbiType::Array(_))
    }

    /// Dynamic array of `element`
    pub fn array_of(element: AbiType) -> Self {
        AbiType::Array(Box::new(element))
    }

    /// Reject widths the canonical type names cannot express
    pub fn validate(&self) -> Result<(), AbiError> {
        match self {
            AbiType::Uint(bits) => check_uint_bits(*bits),
            AbiType::FixedBytes(size) => check_fixed_size(*size),
            AbiType::Array(inner) => inner.validate(),
            _ => Ok(()),
        }
    }
}

pub(crate) fn check_uint_bits(bits: usize) -> Result<(), AbiError> {
    if bits == 0 || bits > 256 || bits % 8 != 0 {
        return Err(AbiError::UnknownType(format!("uint{}", bits)));
    }
    Ok(())
}

pub(crate) fn check_fixed_size(size: usize) -> Result<(), AbiError> {
    if size == 0 || size > 32 {
        return Err(AbiError::UnknownType(format!("bytes{}", size)));
    }
    Ok(())
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiType::Bool => f.write_str("bool"),
            AbiType::Uint(bits) => write!(f, "uint{}", bits),
            AbiType::Address => f.write_str("address"),
            AbiType::FixedBytes(size) => write!(f, "bytes{}", size),
            AbiType::Bytes => f.write_str("bytes"),
            AbiType::String => f.write_str("string"),
            AbiType::Array(inner) => write!(f, "{}[]", inner),
        }
    }
}

impl FromStr for AbiType {
    type Err = AbiError;

    /// Parse a canonical type name (e.g. `uint256`, `address`, `bytes32[]`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(inner) = s.strip_suffix("[]") {
            return Ok(AbiType::array_of(inner.parse()?));
        }

        match s {
            "bool" => return Ok(AbiType::Bool),
            "address" => return Ok(AbiType::Address),
            "bytes" => return Ok(AbiType::Bytes),
            "string" => return Ok(AbiType::String),
            "uint" => return Ok(AbiType::Uint(256)),
            _ => {}
        }

        if let Some(rest) = s.strip_prefix("uint") {
            let bits = parse_width(s, rest)?;
            check_uint_bits(bits)?;
            return Ok(AbiType::Uint(bits));
        }

        if let Some(rest) = s.strip_prefix("bytes") {
            let size = parse_width(s, rest)?;
            check_fixed_size(size)?;
            return Ok(AbiType::FixedBytes(size));
        }

        Err(AbiError::UnknownType(s.to_string()))
    }
}

fn parse_width(name: &str, digits: &str) -> Result<usize, AbiError> {
    // Leading zeros and signs are not canonical
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AbiError::UnknownType(name.to_string()));
    }
    digits
        .parse()
        .map_err(|_| AbiError::UnknownType(name.to_string()))
}

/// Parse a comma-separated list of canonical type names.
///
/// An empty (or all-whitespace) list yields no types.
pub fn parse_type_list(list: &str) -> Result<Vec<AbiType>, AbiError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',').map(str::parse).collect()
}
