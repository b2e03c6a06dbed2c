//! Common utilities for integration tests.

use alloy::providers::{mock::Asserter, Provider, ProviderBuilder};
use eth_node_client::{Config, EthereumClient};

/// Build a client backed by a mocked transport.
///
/// Responses queued on the returned [`Asserter`] are served to requests in
/// FIFO order.
#[allow(dead_code)]
pub fn mocked_client() -> (EthereumClient, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone()).root().clone();
    (EthereumClient::from_provider(provider), asserter)
}

/// Helper to create a client for a real node from environment variables.
#[allow(dead_code)]
pub fn create_live_client() -> Option<EthereumClient> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let rpc_url = std::env::var("ETHEREUM_RPC_URL").ok()?;
    if rpc_url.is_empty() {
        return None;
    }

    let config = Config::new(rpc_url, None);
    EthereumClient::from_config(&config).ok()
}

/// Skip test if a live client cannot be created (missing env vars).
#[macro_export]
macro_rules! skip_if_no_node {
    () => {
        match common::create_live_client() {
            Some(client) => client,
            None => {
                eprintln!("Skipping test: ETHEREUM_RPC_URL not set");
                return;
            }
        }
    };
}
