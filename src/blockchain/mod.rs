//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! NetworkConfig (preset or config file)
//!     → client.rs (connect, chain ID probe)
//!     → address.rs (input validation before each call)
//!     → eth_getBalance / eth_blockNumber / eth_getCode
//!
//! providers.rs (JSON node list) → client.rs failover at connect time
//! transaction.rs (TxParams) → client.rs (nonce, chain ID) → TransactionRequest
//! ```
//!
//! # Constraints
//! - Invalid addresses never reach the network
//! - Every RPC call is bounded by the configured timeout
//! - No retries or caching; failures surface with their transport cause

pub mod address;
pub mod client;
pub mod network;
pub mod providers;
pub mod transaction;
pub mod types;

pub use address::{is_hex_address, parse_address};
pub use client::EthClient;
pub use network::{Network, NetworkConfig};
pub use providers::{ProviderList, ProviderListError};
pub use transaction::TxParams;
pub use types::{BlockchainError, BlockchainResult, ChainId};
