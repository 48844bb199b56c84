//! Typed ABI values
//!
//! Each variant knows its canonical type name and how it renders into the
//! head and tail segments of the encoding:
//!
//! | type           | head                         | tail                                  |
//! |----------------|------------------------------|---------------------------------------|
//! | `bool`         | `0` or `1` in the last byte  | empty                                 |
//! | `uintN`        | big-endian, left-zero-padded | empty                                 |
//! | `address`      | 20 bytes, left-zero-padded   | empty                                 |
//! | `bytesN`       | N bytes, right-zero-padded   | empty                                 |
//! | `bytes`        | offset (set by the codec)    | length word ++ payload, right-padded  |
//! | `string`       | offset (set by the codec)    | same as `bytes` over the UTF-8 bytes  |
//! | `T[]`          | offset (set by the codec)    | count word ++ elements' head/tail     |
//!
//! Values are immutable once built; constructors validate the invariants
//! (widths, lengths, element types) so encoding itself cannot fail.

use std::fmt;

use ethcall_primitives::{hex, Address, U256};

use crate::encode::encode_params;
use crate::types::{check_fixed_size, check_uint_bits};
use crate::word::{pad_right, u256_word, usize_word, Word, WORD_SIZE};
use crate::{AbiError, AbiType};

/// Unsigned integer of a declared bit width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uint {
    bits: usize,
    value: U256,
}

impl Uint {
    /// Create a `uint<bits>`; fails when `value` does not fit in `bits`
    pub fn new(bits: usize, value: U256) -> Result<Self, AbiError> {
        check_uint_bits(bits)?;
        if value.bits() > bits {
            return Err(AbiError::InvalidValue(format!(
                "{} does not fit in uint{}",
                value, bits
            )));
        }
        Ok(Self { bits, value })
    }

    /// Declared bit width
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Magnitude
    pub fn value(&self) -> U256 {
        self.value
    }
}

/// Fixed-size byte string (`bytes1` through `bytes32`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedBytes(Vec<u8>);

impl FixedBytes {
    /// Create a `bytes<size>`; `bytes` must hold exactly `size` bytes
    pub fn new(size: usize, bytes: &[u8]) -> Result<Self, AbiError> {
        check_fixed_size(size).map_err(|_| {
            AbiError::InvalidValue(format!("bytes{} is not a valid fixed size", size))
        })?;
        if bytes.len() != size {
            return Err(AbiError::InvalidLength {
                expected: size,
                got: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }

    /// Declared size in bytes
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Dynamic array with a known element type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array {
    element: AbiType,
    items: Vec<AbiValue>,
}

impl Array {
    /// Create a `T[]`; every item must be of type `element`
    pub fn new(element: AbiType, items: Vec<AbiValue>) -> Result<Self, AbiError> {
        element.validate()?;
        if let Some((index, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| item.abi_type() != element)
        {
            return Err(AbiError::InvalidValue(format!(
                "element {} of {}[] has type {}",
                index,
                element,
                item.abi_type()
            )));
        }
        Ok(Self { element, items })
    }

    /// Element type
    pub fn element_type(&self) -> &AbiType {
        &self.element
    }

    /// Elements in order
    pub fn items(&self) -> &[AbiValue] {
        &self.items
    }
}

/// A typed ABI value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbiValue {
    /// Boolean
    Bool(bool),
    /// Unsigned integer (uint8 .. uint256)
    Uint(Uint),
    /// Address (20 bytes)
    Address(Address),
    /// Fixed-size bytes (1-32)
    FixedBytes(FixedBytes),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// UTF-8 string
    String(String),
    /// Dynamic array
    Array(Array),
}

impl AbiValue {
    /// Create a bool value
    pub fn bool(value: bool) -> Self {
        AbiValue::Bool(value)
    }

    /// Create a uint8 value
    pub fn uint8(value: u8) -> Self {
        AbiValue::Uint(Uint {
            bits: 8,
            value: U256::from(value),
        })
    }

    /// Create a uint32 value
    pub fn uint32(value: u32) -> Self {
        AbiValue::Uint(Uint {
            bits: 32,
            value: U256::from(value),
        })
    }

    /// Create a uint256 value
    pub fn uint256(value: U256) -> Self {
        AbiValue::Uint(Uint { bits: 256, value })
    }

    /// Create a uint of any supported width
    pub fn uint(bits: usize, value: U256) -> Result<Self, AbiError> {
        Uint::new(bits, value).map(AbiValue::Uint)
    }

    /// Create a uint from a signed integer; negative input is rejected
    pub fn uint_from_i128(bits: usize, value: i128) -> Result<Self, AbiError> {
        let magnitude = u128::try_from(value).map_err(|_| {
            AbiError::InvalidValue(format!("uint{} cannot hold negative value {}", bits, value))
        })?;
        Self::uint(bits, U256::from(magnitude))
    }

    /// Create a uint from a decimal string
    pub fn uint_from_dec_str(bits: usize, s: &str) -> Result<Self, AbiError> {
        let s = s.trim();
        if s.starts_with('-') {
            return Err(AbiError::InvalidValue(format!(
                "uint{} cannot hold negative value {}",
                bits, s
            )));
        }
        let value = U256::from_dec_str(s).map_err(|e| {
            AbiError::InvalidValue(format!("{:?} is not a uint{}: {:?}", s, bits, e))
        })?;
        Self::uint(bits, value)
    }

    /// Create an address value
    pub fn address(address: Address) -> Self {
        AbiValue::Address(address)
    }

    /// Create an address from raw bytes; anything but 20 bytes is rejected
    pub fn address_from_slice(bytes: &[u8]) -> Result<Self, AbiError> {
        let address = Address::from_slice(bytes).map_err(|_| AbiError::InvalidLength {
            expected: Address::LEN,
            got: bytes.len(),
        })?;
        Ok(AbiValue::Address(address))
    }

    /// Create a `bytes<size>` value
    pub fn fixed_bytes(size: usize, bytes: &[u8]) -> Result<Self, AbiError> {
        FixedBytes::new(size, bytes).map(AbiValue::FixedBytes)
    }

    /// Create a dynamic bytes value
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        AbiValue::Bytes(data.into())
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        AbiValue::String(s.into())
    }

    /// Create a dynamic array value
    pub fn array(element: AbiType, items: Vec<AbiValue>) -> Result<Self, AbiError> {
        Array::new(element, items).map(AbiValue::Array)
    }

    /// Create a `uint256[]` value
    pub fn uint256_array(values: impl IntoIterator<Item = U256>) -> Self {
        AbiValue::Array(Array {
            element: AbiType::Uint(256),
            items: values.into_iter().map(AbiValue::uint256).collect(),
        })
    }

    /// Get the type of this value
    pub fn abi_type(&self) -> AbiType {
        match self {
            AbiValue::Bool(_) => AbiType::Bool,
            AbiValue::Uint(uint) => AbiType::Uint(uint.bits),
            AbiValue::Address(_) => AbiType::Address,
            AbiValue::FixedBytes(bytes) => AbiType::FixedBytes(bytes.size()),
            AbiValue::Bytes(_) => AbiType::Bytes,
            AbiValue::String(_) => AbiType::String,
            AbiValue::Array(array) => AbiType::array_of(array.element.clone()),
        }
    }

    /// Canonical type name used in function signatures
    pub fn type_name(&self) -> String {
        self.abi_type().to_string()
    }

    /// Check if this value is dynamic (its head is an offset into the tail)
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self,
            AbiValue::Bytes(_) | AbiValue::String(_) | AbiValue::Array(_)
        )
    }

    /// Head word of a static value.
    ///
    /// Returns `None` for dynamic values: their head is the tail offset, which
    /// only the codec knows at assembly time.
    pub fn head(&self) -> Option<Word> {
        let mut word = [0u8; WORD_SIZE];
        match self {
            AbiValue::Bool(b) => word[31] = u8::from(*b),
            AbiValue::Uint(uint) => word = u256_word(&uint.value),
            AbiValue::Address(address) => word[12..].copy_from_slice(address.as_bytes()),
            AbiValue::FixedBytes(bytes) => word[..bytes.size()].copy_from_slice(bytes.as_bytes()),
            AbiValue::Bytes(_) | AbiValue::String(_) | AbiValue::Array(_) => return None,
        }
        Some(word)
    }

    /// Tail bytes; empty for static values, a word multiple otherwise
    pub fn tail(&self) -> Vec<u8> {
        match self {
            AbiValue::Bytes(data) => encode_length_prefixed(data),
            AbiValue::String(s) => encode_length_prefixed(s.as_bytes()),
            AbiValue::Array(array) => {
                let mut tail = usize_word(array.items.len()).to_vec();
                tail.extend(encode_params(&array.items));
                tail
            }
            _ => Vec::new(),
        }
    }

    /// Parse a static value of type `ty` from its head word.
    ///
    /// Padding bytes must be zero; a word that does not round-trip to the
    /// same bytes is rejected as `InvalidValue`.
    pub fn parse(ty: &AbiType, word: &Word) -> Result<Self, AbiError> {
        match ty {
            AbiType::Bool => match (zero_prefix(word, 31), word[31]) {
                (true, 0) => Ok(AbiValue::Bool(false)),
                (true, 1) => Ok(AbiValue::Bool(true)),
                _ => Err(invalid_word(ty, word)),
            },
            AbiType::Uint(bits) => {
                Self::uint(*bits, U256::from_big_endian(word)).map_err(|e| match e {
                    AbiError::InvalidValue(_) => invalid_word(ty, word),
                    other => other,
                })
            }
            AbiType::Address => {
                if !zero_prefix(word, 12) {
                    return Err(invalid_word(ty, word));
                }
                Self::address_from_slice(&word[12..])
            }
            AbiType::FixedBytes(size) => {
                check_fixed_size(*size)?;
                if word[*size..].iter().any(|b| *b != 0) {
                    return Err(invalid_word(ty, word));
                }
                Self::fixed_bytes(*size, &word[..*size])
            }
            AbiType::Bytes | AbiType::String | AbiType::Array(_) => {
                Err(AbiError::UnsupportedOperation(format!(
                    "decoding dynamic type {} is not supported",
                    ty
                )))
            }
        }
    }

    /// Get the boolean, if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AbiValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the magnitude, if this is a uint
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            AbiValue::Uint(uint) => Some(uint.value),
            _ => None,
        }
    }

    /// Get the address, if this is an address
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            AbiValue::Address(address) => Some(address),
            _ => None,
        }
    }
}

fn encode_length_prefixed(data: &[u8]) -> Vec<u8> {
    let mut tail = usize_word(data.len()).to_vec();
    tail.extend(pad_right(data));
    tail
}

fn zero_prefix(word: &Word, len: usize) -> bool {
    word[..len].iter().all(|b| *b == 0)
}

fn invalid_word(ty: &AbiType, word: &Word) -> AbiError {
    AbiError::InvalidValue(format!("{} is not a valid {} word", hex::encode_prefixed(word), ty))
}

impl fmt::Display for AbiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiValue::Bool(b) => write!(f, "{}", b),
            AbiValue::Uint(uint) => write!(f, "{}", uint.value),
            AbiValue::Address(address) => write!(f, "{}", address),
            AbiValue::FixedBytes(bytes) => f.write_str(&hex::encode_prefixed(bytes.as_bytes())),
            AbiValue::Bytes(data) => f.write_str(&hex::encode_prefixed(data)),
            AbiValue::String(s) => f.write_str(s),
            AbiValue::Array(array) => {
                f.write_str("[")?;
                for (i, item) in array.items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for AbiValue {
    fn from(value: bool) -> Self {
        AbiValue::bool(value)
    }
}

impl From<u8> for AbiValue {
    fn from(value: u8) -> Self {
        AbiValue::uint8(value)
    }
}

impl From<u32> for AbiValue {
    fn from(value: u32) -> Self {
        AbiValue::uint32(value)
    }
}

impl From<U256> for AbiValue {
    fn from(value: U256) -> Self {
        AbiValue::uint256(value)
    }
}

impl From<Address> for AbiValue {
    fn from(value: Address) -> Self {
        AbiValue::address(value)
    }
}

impl From<&str> for AbiValue {
    fn from(value: &str) -> Self {
        AbiValue::string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_with_last(byte: u8) -> Word {
        let mut word = [0u8; 32];
        word[31] = byte;
        word
    }

    // ==================== Static heads ====================

    #[test]
    fn test_bool_head() {
        assert_eq!(AbiValue::bool(true).head(), Some(word_with_last(1)));
        assert_eq!(AbiValue::bool(false).head(), Some([0u8; 32]));
        assert!(AbiValue::bool(true).tail().is_empty());
    }

    #[test]
    fn test_uint_heads() {
        assert_eq!(AbiValue::uint8(0xff).head(), Some(word_with_last(0xff)));
        assert_eq!(AbiValue::uint32(69).head(), Some(word_with_last(69)));

        let head = AbiValue::uint256(U256::from(0x0102_0304u64)).head().unwrap();
        assert_eq!(&head[28..], &[1, 2, 3, 4]);
        assert!(head[..28].iter().all(|b| *b == 0));

        assert_eq!(AbiValue::uint256(U256::MAX).head(), Some([0xff; 32]));
    }

    #[test]
    fn test_address_head() {
        let address = Address::from_bytes([0xab; 20]);
        let head = AbiValue::address(address).head().unwrap();
        assert!(head[..12].iter().all(|b| *b == 0));
        assert_eq!(&head[12..], address.as_bytes());
    }

    #[test]
    fn test_fixed_bytes_head_is_left_justified() {
        let head = AbiValue::fixed_bytes(4, b"dave").unwrap().head().unwrap();
        assert_eq!(&head[..4], b"dave");
        assert!(head[4..].iter().all(|b| *b == 0));
    }

    // ==================== Dynamic tails ====================

    #[test]
    fn test_bytes_tail() {
        let value = AbiValue::bytes(b"dave".to_vec());
        assert!(value.is_dynamic());
        assert_eq!(value.head(), None);

        let tail = value.tail();
        assert_eq!(tail.len(), 64);
        assert_eq!(tail[31], 4);
        assert_eq!(&tail[32..36], b"dave");
        assert!(tail[36..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_empty_bytes_tail_is_length_only() {
        assert_eq!(AbiValue::bytes(Vec::new()).tail(), vec![0u8; 32]);
    }

    #[test]
    fn test_bytes_tail_exact_word_has_no_extra_padding() {
        let tail = AbiValue::bytes(vec![0x11; 32]).tail();
        assert_eq!(tail.len(), 64);
    }

    #[test]
    fn test_string_tail_matches_bytes() {
        let s = "héllo";
        assert_eq!(
            AbiValue::string(s).tail(),
            AbiValue::bytes(s.as_bytes().to_vec()).tail()
        );
    }

    #[test]
    fn test_uint256_array_tail() {
        let value = AbiValue::uint256_array([1u64, 2, 3].map(U256::from));
        let tail = value.tail();
        assert_eq!(tail.len(), 4 * 32);
        assert_eq!(tail[31], 3);
        assert_eq!(tail[63], 1);
        assert_eq!(tail[95], 2);
        assert_eq!(tail[127], 3);
    }

    #[test]
    fn test_string_array_tail_nests_offsets() {
        let value = AbiValue::array(
            AbiType::String,
            vec![AbiValue::string("a"), AbiValue::string("b")],
        )
        .unwrap();
        let tail = value.tail();
        // count, two offsets, two (length, payload) pairs
        assert_eq!(tail.len(), 32 * 7);
        assert_eq!(tail[31], 2);
        assert_eq!(tail[63], 0x40);
        assert_eq!(tail[95], 0x80);
        assert_eq!(tail[127], 1);
        assert_eq!(tail[128], b'a');
    }

    // ==================== Type names ====================

    #[test]
    fn test_type_names() {
        assert_eq!(AbiValue::bool(true).type_name(), "bool");
        assert_eq!(AbiValue::uint8(1).type_name(), "uint8");
        assert_eq!(AbiValue::uint32(1).type_name(), "uint32");
        assert_eq!(AbiValue::uint256(U256::one()).type_name(), "uint256");
        assert_eq!(AbiValue::address(Address::ZERO).type_name(), "address");
        assert_eq!(AbiValue::bytes(vec![]).type_name(), "bytes");
        assert_eq!(AbiValue::string("").type_name(), "string");
        assert_eq!(AbiValue::uint256_array([]).type_name(), "uint256[]");
    }

    // ==================== Construction errors ====================

    #[test]
    fn test_address_wrong_length() {
        assert_eq!(
            AbiValue::address_from_slice(&[0u8; 19]),
            Err(AbiError::InvalidLength { expected: 20, got: 19 })
        );
        assert_eq!(
            AbiValue::address_from_slice(&[0u8; 21]),
            Err(AbiError::InvalidLength { expected: 20, got: 21 })
        );
    }

    #[test]
    fn test_negative_uint_rejected() {
        assert!(matches!(
            AbiValue::uint_from_i128(256, -1),
            Err(AbiError::InvalidValue(_))
        ));
        assert!(matches!(
            AbiValue::uint_from_dec_str(256, "-42"),
            Err(AbiError::InvalidValue(_))
        ));
        assert_eq!(
            AbiValue::uint_from_i128(32, 69).unwrap(),
            AbiValue::uint32(69)
        );
    }

    #[test]
    fn test_uint_width_overflow_rejected() {
        assert!(matches!(
            AbiValue::uint(8, U256::from(256)),
            Err(AbiError::InvalidValue(_))
        ));
        assert!(AbiValue::uint(8, U256::from(255)).is_ok());
        // 2^256 needs 33 bytes
        let too_big = "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(matches!(
            AbiValue::uint_from_dec_str(256, too_big),
            Err(AbiError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_fixed_bytes_wrong_length() {
        assert_eq!(
            AbiValue::fixed_bytes(32, &[0u8; 31]),
            Err(AbiError::InvalidLength { expected: 32, got: 31 })
        );
        assert!(matches!(
            AbiValue::fixed_bytes(33, &[0u8; 33]),
            Err(AbiError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_array_element_type_checked() {
        let result = AbiValue::array(
            AbiType::Uint(256),
            vec![AbiValue::uint256(U256::one()), AbiValue::bool(true)],
        );
        assert!(matches!(result, Err(AbiError::InvalidValue(_))));
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_static_words() {
        assert_eq!(
            AbiValue::parse(&AbiType::Bool, &word_with_last(1)).unwrap(),
            AbiValue::bool(true)
        );
        assert_eq!(
            AbiValue::parse(&AbiType::Uint(256), &word_with_last(42)).unwrap(),
            AbiValue::uint256(U256::from(42))
        );
        assert_eq!(
            AbiValue::parse(&AbiType::Uint(32), &word_with_last(69)).unwrap(),
            AbiValue::uint32(69)
        );
    }

    #[test]
    fn test_parse_rejects_dirty_padding() {
        assert!(matches!(
            AbiValue::parse(&AbiType::Bool, &word_with_last(2)),
            Err(AbiError::InvalidValue(_))
        ));
        let mut word = [0u8; 32];
        word[0] = 1;
        assert!(matches!(
            AbiValue::parse(&AbiType::Address, &word),
            Err(AbiError::InvalidValue(_))
        ));
        assert!(matches!(
            AbiValue::parse(&AbiType::Uint(8), &usize_word(256)),
            Err(AbiError::InvalidValue(_))
        ));
        assert!(matches!(
            AbiValue::parse(&AbiType::FixedBytes(4), &word_with_last(1)),
            Err(AbiError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_parse_dynamic_unsupported() {
        for ty in [AbiType::Bytes, AbiType::String, AbiType::array_of(AbiType::Bool)] {
            assert!(matches!(
                AbiValue::parse(&ty, &[0u8; 32]),
                Err(AbiError::UnsupportedOperation(_))
            ));
        }
    }

    // ==================== Display ====================

    #[test]
    fn test_display() {
        assert_eq!(AbiValue::uint256(U256::from(42)).to_string(), "42");
        assert_eq!(AbiValue::bool(false).to_string(), "false");
        assert_eq!(AbiValue::bytes(vec![0xde, 0xad]).to_string(), "0xdead");
        assert_eq!(
            AbiValue::uint256_array([1u64, 2].map(U256::from)).to_string(),
            "[1,2]"
        );
    }
}
