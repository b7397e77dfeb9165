//! Ethereum JSON-RPC and signature helpers on top of alloy.

pub mod blockchain;
pub mod config;
pub mod error;
pub mod info;
pub mod observability;
pub mod signature;

pub use blockchain::{EthClient, Network, NetworkConfig};
pub use error::ErrorKind;
