//! ABI encoding

use tracing::trace;

use crate::word::{usize_word, Word, WORD_SIZE};
use crate::AbiValue;

/// An argument placed in the argument block.
///
/// For static values `head` is the value itself and `tail` is empty; for
/// dynamic values `head` is the offset of `tail` from the start of the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The argument's word in the head section
    pub head: Word,
    /// Bytes appended to the tail section
    pub tail: Vec<u8>,
}

/// Resolve the head word and tail bytes of each argument.
///
/// Offsets are relative to the start of the head section, which is one word
/// per argument.
pub fn place(args: &[AbiValue]) -> Vec<Placement> {
    let mut tail_offset = WORD_SIZE * args.len();

    args.iter()
        .enumerate()
        .map(|(index, arg)| match arg.head() {
            Some(head) => Placement {
                head,
                tail: Vec::new(),
            },
            None => {
                let tail = arg.tail();
                trace!(index, offset = tail_offset, len = tail.len(), "placing dynamic argument");
                let head = usize_word(tail_offset);
                tail_offset += tail.len();
                Placement { head, tail }
            }
        })
        .collect()
}

/// Encode arguments as `heads ++ tails`, without a selector
pub fn encode_params(args: &[AbiValue]) -> Vec<u8> {
    let placements = place(args);
    let tail_len: usize = placements.iter().map(|p| p.tail.len()).sum();

    let mut encoded = Vec::with_capacity(WORD_SIZE * placements.len() + tail_len);
    for placement in &placements {
        encoded.extend_from_slice(&placement.head);
    }
    for placement in placements {
        encoded.extend(placement.tail);
    }
    encoded
}

/// Canonical signature `name(type1,type2,...)`; no arguments gives `name()`
pub fn signature(name: &str, args: &[AbiValue]) -> String {
    let types: Vec<String> = args.iter().map(AbiValue::type_name).collect();
    format!("{}({})", name, types.join(","))
}
