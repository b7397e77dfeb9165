//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::blockchain::network::{Network, NetworkConfig};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Node connection settings.
    pub network: NetworkSection,

    /// Logging settings.
    pub logging: LoggingConfig,

    /// Optional JSON file listing node URLs (`{"nodes": [...]}`).
    pub providers_file: Option<String>,
}

/// `[network]` section. Unset fields fall back to the preset.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkSection {
    /// Preset used as the base (mainnet, goerli, sepolia, local).
    pub preset: Network,

    /// JSON-RPC endpoint URL override.
    pub url: Option<String>,

    /// Chain ID override.
    pub chain_id: Option<u64>,

    /// RPC request timeout override, in seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for NetworkSection {
    fn default() -> Self {
        Self {
            preset: Network::Local,
            url: None,
            chain_id: None,
            timeout_secs: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve the `[network]` section into connection settings.
    pub fn network_config(&self) -> NetworkConfig {
        self.network.resolve()
    }
}

impl NetworkSection {
    pub fn resolve(&self) -> NetworkConfig {
        let mut config = self.preset.config();
        if let Some(url) = &self.url {
            config = config.with_url(url.clone());
        }
        if let Some(chain_id) = self.chain_id {
            config = config.with_chain_id(chain_id);
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config = config.with_timeout_secs(timeout_secs);
        }
        config
    }
}
