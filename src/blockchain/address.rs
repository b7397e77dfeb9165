//! Address format checks performed before any RPC call.

use alloy::primitives::Address;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Length of a prefixed hex address.
pub const ADDRESS_HEX_LEN: usize = 42;

/// Returns true if `address` is `0x`/`0X` followed by exactly 40 hex digits.
///
/// Case is not checked against EIP-55; mixed-case input is accepted as is.
pub fn is_hex_address(address: &str) -> bool {
    if address.len() != ADDRESS_HEX_LEN {
        return false;
    }
    let Some(hex_part) = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
    else {
        return false;
    };
    hex_part.chars().all(|c| c.is_ascii_hexdigit())
}

/// Validate and parse an address string.
pub fn parse_address(address: &str) -> BlockchainResult<Address> {
    if !is_hex_address(address) {
        return Err(BlockchainError::InvalidAddress(address.to_string()));
    }

    // Decode the 40 digits only; the prefix may be upper-case.
    address[2..]
        .parse::<Address>()
        .map_err(|_| BlockchainError::InvalidAddress(address.to_string()))
}
