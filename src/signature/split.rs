//! Splitting hex signatures into components.

use crate::signature::types::{SignatureError, SignatureParts, SignatureResult, SIGNATURE_HEX_LEN};

/// Strip an optional `0x`/`0X` prefix.
pub(crate) fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Split a hex signature into `r`, `s` and `v`.
///
/// `r` and `s` are returned as the 64-character slices of the input; `v`
/// is the last byte read as base-16.
pub fn split_signature(signature: &str) -> SignatureResult<SignatureParts> {
    let payload = strip_hex_prefix(signature);

    if payload.len() != SIGNATURE_HEX_LEN {
        return Err(SignatureError::InvalidFormat(format!(
            "expected {} hex characters, got {}",
            SIGNATURE_HEX_LEN,
            payload.len()
        )));
    }
    if !payload.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SignatureError::InvalidFormat(
            "signature contains non-hex characters".into(),
        ));
    }

    let v = u64::from_str_radix(&payload[128..], 16)
        .map_err(|e| SignatureError::InvalidFormat(format!("invalid v byte: {}", e)))?;

    Ok(SignatureParts {
        r: payload[..64].to_string(),
        s: payload[64..128].to_string(),
        v,
    })
}
