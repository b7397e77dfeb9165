//! Recovering the signing address of a personal message.

use alloy::primitives::{hex, Address, Signature, U256};

use crate::signature::hash::text_hash;
use crate::signature::split::strip_hex_prefix;
use crate::signature::types::{SignatureError, SignatureResult, SIGNATURE_LEN};

/// Map the trailing `v` byte to a y-parity bit.
///
/// Both the raw `{0, 1}` form and the legacy `{27, 28}` form are accepted.
pub fn normalize_v(v: u8) -> SignatureResult<bool> {
    match v {
        0 | 27 => Ok(false),
        1 | 28 => Ok(true),
        other => Err(SignatureError::Recovery(format!(
            "recovery id {} is not one of 0, 1, 27, 28",
            other
        ))),
    }
}

/// Recover the address that signed `message` under EIP-191.
///
/// `signature` is `r (32) || s (32) || v (1)`.
pub fn recover_signer(message: impl AsRef<[u8]>, signature: &[u8]) -> SignatureResult<Address> {
    if signature.len() != SIGNATURE_LEN {
        return Err(SignatureError::Recovery(format!(
            "expected {} signature bytes, got {}",
            SIGNATURE_LEN,
            signature.len()
        )));
    }

    let parity = normalize_v(signature[64])?;
    let sig = Signature::new(
        U256::from_be_slice(&signature[..32]),
        U256::from_be_slice(&signature[32..64]),
        parity,
    );

    let prehash = text_hash(message);
    let address = sig
        .recover_address_from_prehash(&prehash)
        .map_err(|e| SignatureError::Recovery(e.to_string()))?;

    tracing::debug!(%address, "Recovered message signer");
    Ok(address)
}

/// Like [`recover_signer`], taking the signature as hex.
pub fn recover_signer_hex(message: impl AsRef<[u8]>, signature: &str) -> SignatureResult<Address> {
    let bytes = hex::decode(strip_hex_prefix(signature))
        .map_err(|e| SignatureError::InvalidFormat(e.to_string()))?;
    recover_signer(message, &bytes)
}
