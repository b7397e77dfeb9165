//! Chain-specific types and error definitions.

use alloy::transports::TransportError;
use thiserror::Error;

use crate::error::ErrorKind;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// Address string is not `0x` followed by 40 hex characters.
    #[error("Invalid Ethereum address: {0}")]
    InvalidAddress(String),

    /// Transaction parameters cannot be assembled.
    #[error("Invalid transaction parameters: {0}")]
    InvalidTransaction(String),

    /// Endpoint URL could not be parsed.
    #[error("Invalid RPC URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Endpoint did not answer the connection probe.
    #[error("Failed to connect to {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: TransportError,
    },

    /// Endpoint did not answer the connection probe in time.
    #[error("Connection to {url} timed out after {secs} seconds")]
    ConnectTimeout { url: String, secs: u64 },

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// Client was closed before the call.
    #[error("Client connection is closed")]
    Closed,

    /// No provider URL was available to connect to.
    #[error("No RPC providers available")]
    NoProviders,

    /// RPC request failed; `context` names the query.
    #[error("{context}: {source}")]
    Rpc {
        context: &'static str,
        #[source]
        source: TransportError,
    },

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),
}

impl BlockchainError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlockchainError::InvalidAddress(_) | BlockchainError::InvalidTransaction(_) => {
                ErrorKind::Validation
            }
            BlockchainError::InvalidUrl { .. }
            | BlockchainError::Unreachable { .. }
            | BlockchainError::ConnectTimeout { .. }
            | BlockchainError::ChainMismatch { .. }
            | BlockchainError::Closed
            | BlockchainError::NoProviders => ErrorKind::Connection,
            BlockchainError::Rpc { .. } | BlockchainError::Timeout(_) => ErrorKind::Rpc,
        }
    }
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;
