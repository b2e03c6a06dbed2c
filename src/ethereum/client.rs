//! Ethereum RPC client facade.
//!
//! Every operation is a single delegated call to the node; results come back
//! unmodified and failures propagate as-is.

use std::sync::Arc;
use std::time::Duration;

use alloy::{
    eips::BlockId,
    json_abi::JsonAbi,
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, Bytes, TxHash, U256},
    providers::{Provider, RootProvider},
    rpc::{
        client::RpcClient,
        types::{Block, Filter, Log, Transaction, TransactionReceipt, TransactionRequest},
    },
    transports::http::Http,
};

use crate::{
    config::{Config, DEFAULT_TIMEOUT_MS},
    error::{AppError, Result},
    ethereum::contract::DeployedContract,
};

/// Type alias for the HTTP provider.
pub type HttpProvider = RootProvider<Ethereum>;

/// Ethereum RPC client wrapper.
///
/// Holds a single provider handle shared read-only by any number of in-flight
/// calls; multiplexing and queuing belong to the transport.
#[derive(Clone, Debug)]
pub struct EthereumClient {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
    /// RPC URL for logging.
    rpc_url: String,
    /// Per-request timeout applied to the connection handle.
    timeout: Duration,
}

impl EthereumClient {
    /// Create a new Ethereum client with the default 10000ms timeout.
    ///
    /// Note: This does NOT make any network calls. A dead endpoint surfaces
    /// as an error on the first operation.
    pub fn new(rpc_url: &str) -> Result<Self> {
        Self::with_timeout(rpc_url, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    /// Create a new Ethereum client with an explicit request timeout.
    ///
    /// The timeout bounds how long any single call waits before failing with
    /// a transport error.
    pub fn with_timeout(rpc_url: &str, timeout: Duration) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let transport = Http::with_client(http_client, url);
        let provider = RootProvider::<Ethereum>::new(RpcClient::new(transport, false));

        tracing::info!(rpc_url = %rpc_url, timeout_ms = timeout.as_millis() as u64, "Ethereum client created");

        Ok(Self { provider: Arc::new(provider), rpc_url: rpc_url.to_string(), timeout })
    }

    /// Create a client from a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(&config.rpc_url, Duration::from_millis(config.timeout_ms))
    }

    /// Wrap an existing provider, e.g. one backed by a mocked transport.
    pub fn from_provider(provider: HttpProvider) -> Self {
        Self {
            provider: Arc::new(provider),
            rpc_url: String::new(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    /// Get the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the receipt of a mined transaction, or `None` before confirmation.
    pub async fn get_transaction_receipt(
        &self,
        hash: TxHash,
    ) -> Result<Option<TransactionReceipt>> {
        tracing::debug!(hash = %hash, "Querying transaction receipt");
        let receipt = self.provider.get_transaction_receipt(hash).await?;
        Ok(receipt)
    }

    /// Get a block by number or hash, or `None` if the node does not know it.
    pub async fn get_block(&self, block: impl Into<BlockId>) -> Result<Option<Block>> {
        let block = block.into();
        tracing::debug!(block = ?block, "Querying block");
        let block = self.provider.get_block(block).await?;
        Ok(block)
    }

    /// Estimate gas for a transaction.
    ///
    /// Fails with the node's error if the transaction would revert.
    pub async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64> {
        tracing::debug!(to = ?tx.to, "Estimating gas");
        let gas = self.provider.estimate_gas(tx.clone()).await?;
        Ok(gas)
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> Result<u128> {
        tracing::debug!("Querying gas price");
        let gas_price = self.provider.get_gas_price().await?;
        Ok(gas_price)
    }

    /// List the node-managed accounts. Empty unless the node holds keys.
    pub async fn get_accounts(&self) -> Result<Vec<Address>> {
        tracing::debug!("Querying node-managed accounts");
        let accounts = self.provider.get_accounts().await?;
        Ok(accounts)
    }

    /// Get the network id (`net_version`).
    pub async fn get_net_version(&self) -> Result<u64> {
        tracing::debug!("Querying network id");
        let id = self.provider.get_net_version().await?;
        Ok(id)
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> Result<u64> {
        tracing::debug!("Querying latest block number");
        let number = self.provider.get_block_number().await?;
        Ok(number)
    }

    /// Get the number of transactions in a block, or `None` for an unknown
    /// block.
    pub async fn get_block_transaction_count(
        &self,
        block: impl Into<BlockId>,
    ) -> Result<Option<u64>> {
        let block = block.into();
        tracing::debug!(block = ?block, "Querying block transaction count");
        let count = match block {
            BlockId::Hash(hash) => {
                self.provider.get_block_transaction_count_by_hash(hash.block_hash).await?
            }
            BlockId::Number(number) => {
                self.provider.get_block_transaction_count_by_number(number).await?
            }
        };
        Ok(count)
    }

    /// Get the wei balance of an address at the latest block.
    pub async fn get_balance(&self, address: Address) -> Result<U256> {
        tracing::debug!(address = %address, "Querying balance");
        let balance = self.provider.get_balance(address).await?;
        Ok(balance)
    }

    /// Get the transaction count (nonce) of an address at the latest block.
    pub async fn get_transaction_count(&self, address: Address) -> Result<u64> {
        tracing::debug!(address = %address, "Querying transaction count");
        let count = self.provider.get_transaction_count(address).await?;
        Ok(count)
    }

    /// Get the deployed bytecode at an address. Empty for non-contract
    /// addresses.
    pub async fn get_code(&self, address: Address) -> Result<Bytes> {
        tracing::debug!(address = %address, "Querying deployed code");
        let code = self.provider.get_code_at(address).await?;
        Ok(code)
    }

    /// Get a transaction by hash, or `None` if the node does not know it.
    pub async fn get_transaction(&self, hash: TxHash) -> Result<Option<Transaction>> {
        tracing::debug!(hash = %hash, "Querying transaction");
        let tx = self.provider.get_transaction_by_hash(hash).await?;
        Ok(tx)
    }

    /// Get past logs matching a filter (address, topics, block range).
    pub async fn get_past_logs(&self, filter: &Filter) -> Result<Vec<Log>> {
        tracing::debug!(filter = ?filter, "Querying past logs");
        let logs = self.provider.get_logs(filter).await?;
        Ok(logs)
    }

    /// Deploy a contract from a node-managed account and wait for it to be
    /// mined.
    ///
    /// Sends an `eth_sendTransaction` create with the given bytecode, then
    /// waits (bounded by the configured timeout) for the deployment receipt.
    pub async fn deploy_contract(
        &self,
        abi: JsonAbi,
        bytecode: Bytes,
        from: Address,
        gas_limit: u64,
    ) -> Result<DeployedContract> {
        tracing::debug!(from = %from, gas_limit = gas_limit, "Deploying contract");

        let tx = TransactionRequest::default()
            .from(from)
            .gas_limit(gas_limit)
            .input(bytecode.into())
            .into_create();

        let receipt = self
            .provider
            .send_transaction(tx)
            .await?
            .with_timeout(Some(self.timeout))
            .get_receipt()
            .await?;

        if !receipt.status() {
            return Err(AppError::Deploy("deployment transaction reverted".into()));
        }

        let contract = DeployedContract::from_receipt(abi, receipt, self.provider.as_ref().clone())?;

        tracing::info!(address = %contract.address(), rpc_url = %self.rpc_url, "Contract deployed");

        Ok(contract)
    }
}
