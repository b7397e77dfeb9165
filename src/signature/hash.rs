//! Keccak-256 helpers.

use alloy::primitives::{eip191_hash_message, hex, keccak256, B256};

/// Keccak-256 of the UTF-8 bytes of `input`, as lowercase hex without `0x`.
///
/// This is the pre-standard Keccak padding used by Ethereum, not NIST SHA3-256.
pub fn keccak256_hex(input: &str) -> String {
    hex::encode(keccak256(input.as_bytes()))
}

/// Alias for [`keccak256_hex`].
pub fn hash(input: &str) -> String {
    keccak256_hex(input)
}

/// EIP-191 personal message hash:
/// `keccak256("\x19Ethereum Signed Message:\n" + len(message) + message)`.
pub fn text_hash(message: impl AsRef<[u8]>) -> B256 {
    eip191_hash_message(message)
}
