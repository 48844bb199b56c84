//! ABI decoding of return data

use tracing::trace;

use crate::word::{read_word, WORD_SIZE};
use crate::{AbiError, AbiType, AbiValue};

/// Decode return data into one value per slot.
///
/// `data` is raw ABI-encoded return data with no selector. Only static slot
/// types are supported: any dynamic slot fails with `UnsupportedOperation`
/// before a byte is read. Bytes after the last slot are ignored.
pub fn decode(data: &[u8], slots: &[AbiType]) -> Result<Vec<AbiValue>, AbiError> {
    if let Some(slot) = slots.iter().find(|slot| slot.is_dynamic()) {
        return Err(AbiError::UnsupportedOperation(format!(
            "decoding dynamic return type {} is not supported",
            slot
        )));
    }

    let mut values = Vec::with_capacity(slots.len());
    let mut cursor = 0;

    for slot in slots {
        trace!(cursor, slot = %slot, "decoding slot");
        let word = read_word(data, cursor)?;
        values.push(AbiValue::parse(slot, word)?);
        cursor += WORD_SIZE;
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethcall_primitives::{Address, U256};

    #[test]
    fn test_decode_uint256() {
        let mut encoded = [0u8; 32];
        encoded[31] = 42;

        let values = decode(&encoded, &[AbiType::Uint(256)]).unwrap();
        assert_eq!(values, vec![AbiValue::uint256(U256::from(42))]);
    }

    #[test]
    fn test_decode_multiple_params() {
        let addr = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();

        let mut encoded = [0u8; 96];
        encoded[12..32].copy_from_slice(addr.as_bytes());
        encoded[63] = 100;
        encoded[95] = 1;

        let values = decode(
            &encoded,
            &[AbiType::Address, AbiType::Uint(256), AbiType::Bool],
        )
        .unwrap();

        assert_eq!(values.len(), 3);
        assert_eq!(values[0], AbiValue::address(addr));
        assert_eq!(values[1], AbiValue::uint256(U256::from(100)));
        assert_eq!(values[2], AbiValue::bool(true));
    }

    #[test]
    fn test_decode_no_slots() {
        assert!(decode(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut encoded = [0u8; 40];
        encoded[31] = 7;
        let values = decode(&encoded, &[AbiType::Uint(8)]).unwrap();
        assert_eq!(values, vec![AbiValue::uint8(7)]);
    }

    #[test]
    fn test_decode_insufficient_data() {
        let data = [0u8; 16];
        assert_eq!(
            decode(&data, &[AbiType::Uint(256)]),
            Err(AbiError::TruncatedInput { offset: 0, needed: 32, remaining: 16 })
        );
    }

    #[test]
    fn test_decode_second_slot_truncated() {
        let data = [0u8; 48];
        assert_eq!(
            decode(&data, &[AbiType::Bool, AbiType::Bool]),
            Err(AbiError::TruncatedInput { offset: 32, needed: 32, remaining: 16 })
        );
    }

    #[test]
    fn test_decode_dynamic_slot_rejected_up_front() {
        // Shape is checked before length, so even empty data reports the shape
        let result = decode(&[], &[AbiType::Uint(256), AbiType::String]);
        assert!(matches!(result, Err(AbiError::UnsupportedOperation(_))));
    }
}
