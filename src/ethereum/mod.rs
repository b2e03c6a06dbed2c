//! Ethereum interaction module.
//!
//! Contains the Ethereum client facade and the deployed-contract handle.

pub mod client;
pub mod contract;

pub use client::{EthereumClient, HttpProvider};
pub use contract::DeployedContract;
