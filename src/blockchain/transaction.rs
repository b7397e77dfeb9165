//! Unsigned transaction assembly.
//!
//! `TxParams` carries what the caller knows; the client fills in the nonce
//! and chain ID before handing back an alloy `TransactionRequest`.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Caller-supplied transaction fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TxParams {
    to: Address,
    value: U256,
    data: Option<Bytes>,
    nonce: Option<u64>,
    gas: Option<u64>,
    gas_price: Option<u128>,
    gas_price_multiplier: f64,
}

impl TxParams {
    /// Plain transfer of zero wei to `to`.
    pub fn new(to: Address) -> Self {
        Self {
            to,
            value: U256::ZERO,
            data: None,
            nonce: None,
            gas: None,
            gas_price: None,
            gas_price_multiplier: 1.0,
        }
    }

    /// Amount to send in wei.
    pub fn value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub fn data(mut self, data: impl Into<Bytes>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Explicit nonce; when unset the client asks the node.
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Gas limit.
    pub fn gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }

    /// Legacy gas price in wei, before the multiplier is applied.
    pub fn gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    /// Factor applied to the gas price (1.2 = 20% buffer).
    pub fn gas_price_multiplier(mut self, multiplier: f64) -> Self {
        self.gas_price_multiplier = multiplier;
        self
    }

    pub fn explicit_nonce(&self) -> Option<u64> {
        self.nonce
    }

    /// Gas price after the multiplier, truncated to whole wei.
    pub fn effective_gas_price(&self) -> BlockchainResult<Option<u128>> {
        let multiplier = self.gas_price_multiplier;
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(BlockchainError::InvalidTransaction(format!(
                "gas price multiplier must be positive, got {}",
                multiplier
            )));
        }
        Ok(self
            .gas_price
            .map(|price| (price as f64 * multiplier) as u128))
    }

    /// Build the request. Optional fields stay unset when not provided.
    pub fn into_request(
        self,
        from: Address,
        nonce: u64,
        chain_id: u64,
    ) -> BlockchainResult<TransactionRequest> {
        let gas_price = self.effective_gas_price()?;

        let mut tx = TransactionRequest::default()
            .with_from(from)
            .with_to(self.to)
            .with_value(self.value)
            .with_nonce(nonce)
            .with_chain_id(chain_id);

        if let Some(data) = self.data {
            tx = tx.with_input(data);
        }
        if let Some(gas) = self.gas {
            tx = tx.with_gas_limit(gas);
        }
        if let Some(price) = gas_price {
            tx = tx.with_gas_price(price);
        }

        Ok(tx)
    }
}
