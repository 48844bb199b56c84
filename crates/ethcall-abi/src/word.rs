//! 32-byte word helpers

use ethcall_primitives::U256;

use crate::AbiError;

/// Size of an ABI word in bytes
pub const WORD_SIZE: usize = 32;

/// The atomic 32-byte slot of the ABI encoding
pub type Word = [u8; WORD_SIZE];

/// Big-endian, left-zero-padded word for a `U256`
pub fn u256_word(value: &U256) -> Word {
    let mut word = [0u8; WORD_SIZE];
    value.to_big_endian(&mut word);
    word
}

/// Big-endian word for a length or offset
pub fn usize_word(value: usize) -> Word {
    u256_word(&U256::from(value))
}

/// Round `len` up to the next word boundary
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD_SIZE) * WORD_SIZE
}

/// Copy `data` left-justified into a zero buffer sized to a word multiple
pub fn pad_right(data: &[u8]) -> Vec<u8> {
    let mut padded = vec![0u8; padded_len(data.len())];
    padded[..data.len()].copy_from_slice(data);
    padded
}

/// Borrow the word starting at `offset`
pub fn read_word(data: &[u8], offset: usize) -> Result<&Word, AbiError> {
    let remaining = data.len().saturating_sub(offset);
    data.get(offset..offset + WORD_SIZE)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(AbiError::TruncatedInput {
            offset,
            needed: WORD_SIZE,
            remaining,
        })
}
