//! Ethereum Node Client Library
//!
//! A thin async facade over an Ethereum JSON-RPC node. Each method forwards
//! its arguments to the underlying `alloy` provider and returns the node's
//! result unmodified; there is no caching, retrying, or local protocol
//! handling.
//!
//! # Features
//!
//! - **Chain Queries**: blocks, transactions, receipts, logs, gas price
//! - **Account Queries**: balances, nonces, deployed code, node-managed accounts
//! - **Deployment**: deploy a contract from a node-managed account and wait
//!   for it to be mined
//!
//! # Example
//!
//! ```rust,ignore
//! use eth_node_client::EthereumClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EthereumClient::new("http://localhost:8545")?;
//!     let height = client.get_block_number().await?;
//!     println!("latest block: {height}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ethereum;

pub use config::{Config, DEFAULT_TIMEOUT_MS};
pub use error::{AppError, Result};
pub use ethereum::{DeployedContract, EthereumClient, HttpProvider};
