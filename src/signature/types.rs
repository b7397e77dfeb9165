//! Signature value types and error definitions.

use thiserror::Error;

use crate::error::ErrorKind;

/// Byte length of an `r || s || v` signature.
pub const SIGNATURE_LEN: usize = 65;

/// Hex length of a signature without the `0x` prefix.
pub const SIGNATURE_HEX_LEN: usize = SIGNATURE_LEN * 2;

/// Errors from the signature helpers.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// Hex input is not a 65-byte signature.
    #[error("Invalid signature format: {0}")]
    InvalidFormat(String),

    /// Signature could not be turned back into a signer.
    #[error("Signer recovery failed: {0}")]
    Recovery(String),
}

impl SignatureError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SignatureError::InvalidFormat(_) => ErrorKind::Validation,
            SignatureError::Recovery(_) => ErrorKind::Recovery,
        }
    }
}

/// Result type for signature operations.
pub type SignatureResult<T> = Result<T, SignatureError>;

/// A signature split into hex `r`, hex `s` and the recovery byte `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureParts {
    /// First 32 bytes as 64 hex characters, case as given.
    pub r: String,
    /// Next 32 bytes as 64 hex characters, case as given.
    pub s: String,
    /// Final byte.
    pub v: u64,
}

impl SignatureParts {
    /// Re-join into a 130 character payload without prefix.
    pub fn to_hex(&self) -> String {
        format!("{}{}{:02x}", self.r, self.s, self.v)
    }
}
