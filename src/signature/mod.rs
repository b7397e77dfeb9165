//! Stateless signature and hashing helpers.
//!
//! # Data Flow
//! ```text
//! hex signature ──▶ split.rs   (r, s, v)
//! message + sig ──▶ recover.rs (EIP-191 hash → public key → address)
//! text          ──▶ hash.rs    (Keccak-256 hex)
//! ```
//!
//! Nothing here touches the network or holds state.

pub mod hash;
pub mod recover;
pub mod split;
pub mod types;

pub use hash::{hash, keccak256_hex, text_hash};
pub use recover::{normalize_v, recover_signer, recover_signer_hex};
pub use split::split_signature;
pub use types::{SignatureError, SignatureParts, SignatureResult};
