//! Blockchain RPC client facade.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint and probe its chain ID
//! - Validate addresses before querying chain state
//! - Bound every call by the configured timeout
//! - Release the transport on `close` or drop
//!
//! Each query is one round trip. Nothing is retried or cached.

use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::TransportError;
use std::future::IntoFuture;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::address::parse_address;
use crate::blockchain::network::NetworkConfig;
use crate::blockchain::providers::ProviderList;
use crate::blockchain::transaction::TxParams;
use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};

type DynProvider = Box<dyn Provider + Send + Sync>;

/// Connection to a single Ethereum node.
pub struct EthClient {
    /// `None` once the client has been closed.
    provider: Option<DynProvider>,
    config: NetworkConfig,
    timeout_duration: Duration,
}

impl EthClient {
    /// Connect to the node described by `config`.
    ///
    /// The endpoint must answer `eth_chainId` with the configured chain ID.
    pub async fn connect(config: NetworkConfig) -> BlockchainResult<Self> {
        let url: url::Url = config.url().parse().map_err(|e: url::ParseError| {
            BlockchainError::InvalidUrl {
                url: config.url().to_string(),
                reason: e.to_string(),
            }
        })?;

        let provider: DynProvider = Box::new(ProviderBuilder::new().connect_http(url));
        let timeout_duration = Duration::from_secs(config.timeout_secs());

        let actual = match timeout(timeout_duration, provider.get_chain_id()).await {
            Ok(Ok(id)) => id,
            Ok(Err(source)) => {
                tracing::warn!(rpc_url = %config.url(), error = %source, "Connection probe failed");
                return Err(BlockchainError::Unreachable {
                    url: config.url().to_string(),
                    source,
                });
            }
            Err(_) => {
                tracing::warn!(rpc_url = %config.url(), "Connection probe timed out");
                return Err(BlockchainError::ConnectTimeout {
                    url: config.url().to_string(),
                    secs: config.timeout_secs(),
                });
            }
        };

        if actual != config.chain_id() {
            tracing::warn!(
                rpc_url = %config.url(),
                expected = config.chain_id(),
                actual,
                "Chain ID mismatch"
            );
            return Err(BlockchainError::ChainMismatch {
                expected: config.chain_id(),
                actual,
            });
        }

        tracing::info!(
            network = %config.name(),
            rpc_url = %config.url(),
            chain_id = actual,
            "Blockchain client connected"
        );

        Ok(Self {
            provider: Some(provider),
            config,
            timeout_duration,
        })
    }

    /// Connect to the first reachable endpoint in `providers`.
    ///
    /// Starts at the list's current entry and advances it past every
    /// endpoint that fails, so the list ends up pointing at the one in use.
    /// Each endpoint is tried once.
    pub async fn connect_with_failover(
        config: NetworkConfig,
        providers: &mut ProviderList,
    ) -> BlockchainResult<Self> {
        let mut last_err = BlockchainError::NoProviders;

        for _ in 0..providers.len() {
            let Some(url) = providers.current() else {
                break;
            };
            match Self::connect(config.clone().with_url(url)).await {
                Ok(client) => return Ok(client),
                Err(e) => {
                    tracing::warn!(
                        provider_idx = providers.index(),
                        error = %e,
                        "RPC provider failed, trying next"
                    );
                    last_err = e;
                    // Non-empty here, so advancing cannot fail.
                    let _ = providers.advance();
                }
            }
        }

        Err(last_err)
    }

    /// Release the transport. Calling this more than once is harmless.
    pub fn close(&mut self) {
        if self.provider.take().is_some() {
            tracing::info!(rpc_url = %self.config.url(), "Blockchain client closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.provider.is_none()
    }

    /// Balance of `address` in wei at the latest block.
    pub async fn get_balance(&self, address: &str) -> BlockchainResult<U256> {
        let address = parse_address(address)?;
        let provider = self.provider()?;
        tracing::debug!(%address, "eth_getBalance");
        self.call("failed to get balance", provider.get_balance(address))
            .await
    }

    /// Latest block height known to the node.
    pub async fn get_block_number(&self) -> BlockchainResult<u64> {
        let provider = self.provider()?;
        tracing::debug!("eth_blockNumber");
        self.call("failed to get block number", provider.get_block_number())
            .await
    }

    /// True if there is bytecode deployed at `address`.
    pub async fn is_contract_address(&self, address: &str) -> BlockchainResult<bool> {
        let address = parse_address(address)?;
        let provider = self.provider()?;
        tracing::debug!(%address, "eth_getCode");
        let code = self
            .call("failed to get code at address", provider.get_code_at(address))
            .await?;
        Ok(!code.is_empty())
    }

    /// Chain ID reported by the node.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        let provider = self.provider()?;
        tracing::debug!("eth_chainId");
        self.call("failed to get chain id", provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Number of transactions sent from `address` (its next nonce).
    pub async fn get_transaction_count(&self, address: &str) -> BlockchainResult<u64> {
        let address = parse_address(address)?;
        self.transaction_count(address).await
    }

    /// Assemble an unsigned transaction from `from`.
    ///
    /// The nonce is taken from `params` when set, otherwise from the node.
    pub async fn prepare_transaction(
        &self,
        from: &str,
        params: TxParams,
    ) -> BlockchainResult<TransactionRequest> {
        let from = parse_address(from)?;
        // Multiplier is checked before the nonce lookup.
        params.effective_gas_price()?;

        let nonce = match params.explicit_nonce() {
            Some(nonce) => nonce,
            None => self.transaction_count(from).await?,
        };
        params.into_request(from, nonce, self.config.chain_id())
    }

    /// Get the configuration.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    async fn transaction_count(&self, address: Address) -> BlockchainResult<u64> {
        let provider = self.provider()?;
        tracing::debug!(%address, "eth_getTransactionCount");
        self.call(
            "failed to get transaction count",
            provider.get_transaction_count(address),
        )
        .await
    }

    fn provider(&self) -> BlockchainResult<&(dyn Provider + Send + Sync)> {
        self.provider.as_deref().ok_or(BlockchainError::Closed)
    }

    async fn call<T, F>(&self, context: &'static str, fut: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = Result<T, TransportError>>,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(source)) => {
                tracing::warn!(error = %source, "{}", context);
                Err(BlockchainError::Rpc { context, source })
            }
            Err(_) => {
                tracing::warn!(timeout_secs = self.config.timeout_secs(), "{}: timed out", context);
                Err(BlockchainError::Timeout(self.config.timeout_secs()))
            }
        }
    }
}

impl std::fmt::Debug for EthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthClient")
            .field("rpc_url", &self.config.url())
            .field("chain_id", &self.config.chain_id())
            .field("timeout_secs", &self.config.timeout_secs())
            .field("closed", &self.is_closed())
            .finish()
    }
}
