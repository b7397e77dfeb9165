//! EthClient against an in-process JSON-RPC node.

use alloy::primitives::{address, U256};
use easy_web3::blockchain::{BlockchainError, EthClient, NetworkConfig, ProviderList, TxParams};
use easy_web3::ErrorKind;
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod common;
use common::MockNode;

const CHAIN_ID: u64 = 31337;
const ZERO: &str = "0x0000000000000000000000000000000000000000";
const OTHER: &str = "0x1111111111111111111111111111111111111111";

fn config(url: &str) -> NetworkConfig {
    NetworkConfig::new("mock", url, CHAIN_ID).with_timeout_secs(5)
}

#[tokio::test]
async fn test_connect_and_close() {
    let node = MockNode::new(CHAIN_ID).start().await;

    let mut client = EthClient::connect(config(&node.url)).await.unwrap();
    assert!(!client.is_closed());
    assert_eq!(node.count("eth_chainId"), 1);

    client.close();
    client.close();
    assert!(client.is_closed());
}

#[tokio::test]
async fn test_connect_invalid_url() {
    let err = EthClient::connect(NetworkConfig::new("bad", "invalid-url", 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection);
}

#[tokio::test]
async fn test_connect_chain_mismatch() {
    let node = MockNode::new(5).start().await;
    let err = EthClient::connect(config(&node.url)).await.unwrap_err();
    assert!(matches!(
        err,
        BlockchainError::ChainMismatch {
            expected: CHAIN_ID,
            actual: 5
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Connection);
}

/// Log sink shared with a test subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[tokio::test]
async fn test_connect_chain_mismatch_is_logged() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let node = MockNode::new(5).start().await;
    EthClient::connect(config(&node.url)).await.unwrap_err();

    let output = logs.contents();
    assert!(output.contains("WARN"), "{}", output);
    assert!(output.contains("Chain ID mismatch"), "{}", output);
}

#[tokio::test]
async fn test_get_block_number() {
    let node = MockNode::new(CHAIN_ID)
        .with_result("eth_blockNumber", json!("0x10"))
        .start()
        .await;
    let client = EthClient::connect(config(&node.url)).await.unwrap();

    assert_eq!(client.get_block_number().await.unwrap(), 16);
}

#[tokio::test]
async fn test_get_balance() {
    let node = MockNode::new(CHAIN_ID)
        .with_result("eth_getBalance", json!("0xde0b6b3a7640000"))
        .start()
        .await;
    let client = EthClient::connect(config(&node.url)).await.unwrap();

    let balance = client.get_balance(ZERO).await.unwrap();
    assert_eq!(balance, U256::from(1_000_000_000_000_000_000u64));
}

#[tokio::test]
async fn test_is_contract_address() {
    let node = MockNode::new(CHAIN_ID)
        .with_handler("eth_getCode", |params: &Value| {
            let queried = params[0].as_str().unwrap_or_default().to_lowercase();
            if queried == ZERO {
                json!("0x6060604052341561000f57600080fd5b")
            } else {
                json!("0x")
            }
        })
        .start()
        .await;
    let client = EthClient::connect(config(&node.url)).await.unwrap();

    assert!(client.is_contract_address(ZERO).await.unwrap());
    assert!(!client.is_contract_address(OTHER).await.unwrap());
}

#[tokio::test]
async fn test_invalid_address_makes_no_call() {
    let node = MockNode::new(CHAIN_ID)
        .with_result("eth_getBalance", json!("0x0"))
        .with_result("eth_getCode", json!("0x"))
        .start()
        .await;
    let client = EthClient::connect(config(&node.url)).await.unwrap();

    for bad in [
        "",
        "0x123",
        "0000000000000000000000000000000000000000",
        "0xZZ00000000000000000000000000000000000000",
        "0x00000000000000000000000000000000000000000",
    ] {
        let err = client.get_balance(bad).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{}", bad);
        let err = client.is_contract_address(bad).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{}", bad);
    }

    assert_eq!(node.requests(), vec!["eth_chainId".to_string()]);
}

#[tokio::test]
async fn test_calls_after_close() {
    let node = MockNode::new(CHAIN_ID)
        .with_result("eth_blockNumber", json!("0x1"))
        .start()
        .await;
    let mut client = EthClient::connect(config(&node.url)).await.unwrap();
    client.close();

    assert!(matches!(
        client.get_block_number().await,
        Err(BlockchainError::Closed)
    ));
    // Input is still validated first
    assert!(matches!(
        client.get_balance("0x1").await,
        Err(BlockchainError::InvalidAddress(_))
    ));
    assert_eq!(node.count("eth_blockNumber"), 0);
}

#[tokio::test]
async fn test_rpc_error_keeps_source() {
    // eth_blockNumber is not registered, so the node answers with an error
    let node = MockNode::new(CHAIN_ID).start().await;
    let client = EthClient::connect(config(&node.url)).await.unwrap();

    let err = client.get_block_number().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Rpc);
    assert!(err.to_string().starts_with("failed to get block number"));
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_call_timeout() {
    let node = MockNode::new(CHAIN_ID)
        .with_slow_result("eth_blockNumber", json!("0x10"), Duration::from_secs(3))
        .start()
        .await;
    let client = EthClient::connect(config(&node.url).with_timeout_secs(1))
        .await
        .unwrap();

    let err = client.get_block_number().await.unwrap_err();
    assert!(matches!(err, BlockchainError::Timeout(1)));
    assert_eq!(err.kind(), ErrorKind::Rpc);
}

#[tokio::test]
async fn test_get_chain_id_and_nonce() {
    let node = MockNode::new(CHAIN_ID)
        .with_result("eth_getTransactionCount", json!("0x7"))
        .start()
        .await;
    let client = EthClient::connect(config(&node.url)).await.unwrap();

    assert_eq!(client.get_chain_id().await.unwrap().0, CHAIN_ID);
    assert_eq!(client.get_transaction_count(ZERO).await.unwrap(), 7);
}

#[tokio::test]
async fn test_prepare_transaction_fetches_nonce() {
    let node = MockNode::new(CHAIN_ID)
        .with_result("eth_getTransactionCount", json!("0x7"))
        .start()
        .await;
    let client = EthClient::connect(config(&node.url)).await.unwrap();
    let to = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");

    let tx = client
        .prepare_transaction(ZERO, TxParams::new(to).value(U256::from(5u64)))
        .await
        .unwrap();
    assert_eq!(tx.nonce, Some(7));
    assert_eq!(tx.chain_id, Some(CHAIN_ID));
    assert_eq!(tx.value, Some(U256::from(5u64)));

    let tx = client
        .prepare_transaction(ZERO, TxParams::new(to).nonce(42))
        .await
        .unwrap();
    assert_eq!(tx.nonce, Some(42));
    assert_eq!(node.count("eth_getTransactionCount"), 1);
}

#[tokio::test]
async fn test_prepare_transaction_rejects_bad_input() {
    let node = MockNode::new(CHAIN_ID)
        .with_result("eth_getTransactionCount", json!("0x0"))
        .start()
        .await;
    let client = EthClient::connect(config(&node.url)).await.unwrap();
    let to = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");

    let err = client
        .prepare_transaction("0x1", TxParams::new(to))
        .await
        .unwrap_err();
    assert!(matches!(err, BlockchainError::InvalidAddress(_)));

    let err = client
        .prepare_transaction(ZERO, TxParams::new(to).gas_price(1).gas_price_multiplier(-1.0))
        .await
        .unwrap_err();
    assert!(matches!(err, BlockchainError::InvalidTransaction(_)));
    assert_eq!(node.count("eth_getTransactionCount"), 0);
}

#[tokio::test]
async fn test_failover_skips_dead_provider() {
    let node = MockNode::new(CHAIN_ID).start().await;
    let mut providers =
        ProviderList::new(vec!["http://127.0.0.1:1".to_string(), node.url.clone()]);

    let client = EthClient::connect_with_failover(config("http://unused"), &mut providers)
        .await
        .unwrap();
    assert_eq!(client.config().url(), node.url);
    assert_eq!(providers.index(), 1);
}

#[tokio::test]
async fn test_failover_all_dead() {
    let mut providers = ProviderList::new(vec![
        "http://127.0.0.1:1".to_string(),
        "not a url".to_string(),
    ]);

    let err = EthClient::connect_with_failover(config("http://unused"), &mut providers)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection);
    // Wrapped back around to the start
    assert_eq!(providers.index(), 0);
}
