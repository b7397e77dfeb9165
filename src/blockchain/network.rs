//! Network connection settings and named presets.
//!
//! Presets are plain values built by factory functions; nothing here is a
//! global that can be mutated at runtime.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default per-call RPC timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for one Ethereum network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    name: String,
    url: String,
    chain_id: u64,
    timeout_secs: u64,
}

impl NetworkConfig {
    /// Build a custom network configuration.
    pub fn new(name: impl Into<String>, url: impl Into<String>, chain_id: u64) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            chain_id,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Ethereum mainnet (chain ID 1).
    pub fn mainnet() -> Self {
        Self::new("mainnet", "https://eth.llamarpc.com", 1)
    }

    /// Goerli testnet (chain ID 5).
    pub fn goerli() -> Self {
        Self::new("goerli", "https://rpc.ankr.com/eth_goerli", 5)
    }

    /// Sepolia testnet (chain ID 11155111).
    pub fn sepolia() -> Self {
        Self::new("sepolia", "https://rpc.sepolia.org", 11_155_111)
    }

    /// Local development node such as Anvil (chain ID 31337).
    pub fn local() -> Self {
        Self::new("local", "http://localhost:8545", 31_337)
    }

    /// Same network, different endpoint (e.g. a keyed provider URL).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::local()
    }
}

/// Named network presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Goerli,
    Sepolia,
    Local,
}

impl Network {
    /// Configuration for this preset.
    pub fn config(self) -> NetworkConfig {
        match self {
            Network::Mainnet => NetworkConfig::mainnet(),
            Network::Goerli => NetworkConfig::goerli(),
            Network::Sepolia => NetworkConfig::sepolia(),
            Network::Local => NetworkConfig::local(),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "goerli" => Ok(Network::Goerli),
            "sepolia" => Ok(Network::Sepolia),
            "local" => Ok(Network::Local),
            other => Err(format!("unknown network '{}'", other)),
        }
    }
}
