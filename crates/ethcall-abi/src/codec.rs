//! Call codec: selector derivation, call encoding and return decoding

use ethcall_crypto::{Hasher, Keccak256Hasher};
use ethcall_primitives::hex;
use tracing::debug;

use crate::{decode, encode, AbiError, AbiType, AbiValue};

/// First four bytes of the Keccak-256 hash of a function signature
pub type Selector = [u8; 4];

/// Encodes contract calls and decodes their return data.
///
/// Stateless after construction; the only collaborator is the hasher used to
/// derive selectors, so a codec can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallCodec<H = Keccak256Hasher> {
    hasher: H,
}

impl CallCodec {
    /// Create a codec backed by Keccak-256
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Hasher> CallCodec<H> {
    /// Create a codec with a custom hash provider
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Compute the selector of a canonical signature such as `transfer(address,uint256)`
    pub fn selector(&self, signature: &str) -> Selector {
        let hash = self.hasher.digest(signature.as_bytes());
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&hash.as_bytes()[..4]);
        selector
    }

    /// Encode a call: `selector ++ heads ++ tails`
    pub fn encode(&self, function_name: &str, args: &[AbiValue]) -> Vec<u8> {
        let signature = encode::signature(function_name, args);
        let selector = self.selector(&signature);
        debug!(%signature, selector = %hex::encode_prefixed(selector), "encoding call");

        let mut data = selector.to_vec();
        data.extend(encode::encode_params(args));
        data
    }

    /// Decode return data (no selector) into one value per slot
    pub fn decode(&self, data: &[u8], slots: &[AbiType]) -> Result<Vec<AbiValue>, AbiError> {
        debug!(len = data.len(), slots = slots.len(), "decoding return data");
        decode::decode(data, slots)
    }
}

/// Compute function selector (first 4 bytes of keccak256(signature))
pub fn function_selector(signature: &str) -> Selector {
    CallCodec::new().selector(signature)
}

/// Encode a function call with the Keccak-256 codec
pub fn encode_function_call(function_name: &str, args: &[AbiValue]) -> Vec<u8> {
    CallCodec::new().encode(function_name, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethcall_primitives::{H256, U256};

    /// Hasher that returns a fixed digest, to check the codec only uses the prefix
    struct FixedHasher([u8; 32]);

    impl Hasher for FixedHasher {
        fn digest(&self, _data: &[u8]) -> H256 {
            H256::from_bytes(self.0)
        }
    }

    #[test]
    fn test_function_selector() {
        assert_eq!(function_selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(function_selector("balanceOf(address)"), [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(function_selector("baz(uint32,bool)"), [0xcd, 0xcd, 0x77, 0xc0]);
    }

    #[test]
    fn test_custom_hasher() {
        let mut digest = [0u8; 32];
        digest[..4].copy_from_slice(&[1, 2, 3, 4]);
        digest[4] = 0xff;
        let codec = CallCodec::with_hasher(FixedHasher(digest));

        let data = codec.encode("anything", &[AbiValue::bool(true)]);
        assert_eq!(&data[..4], &[1, 2, 3, 4]);
        assert_eq!(data.len(), 36);
    }

    #[test]
    fn test_encode_zero_args_is_selector_only() {
        let codec = CallCodec::new();
        let data = codec.encode("name", &[]);
        assert_eq!(data, function_selector("name()").to_vec());
    }

    #[test]
    fn test_codec_decode_delegates() {
        let codec = CallCodec::new();
        let mut word = [0u8; 32];
        word[31] = 1;
        assert_eq!(
            codec.decode(&word, &[AbiType::Uint(256)]).unwrap(),
            vec![AbiValue::uint256(U256::one())]
        );
    }

    #[test]
    fn test_codec_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CallCodec>();
    }
}
