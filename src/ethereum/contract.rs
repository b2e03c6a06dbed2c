//! Deployed contract handle.

use alloy::{
    contract::{ContractInstance, Interface},
    json_abi::JsonAbi,
    primitives::Address,
    rpc::types::TransactionReceipt,
};

use crate::{
    error::{AppError, Result},
    ethereum::client::HttpProvider,
};

/// Handle to a contract deployed through [`EthereumClient::deploy_contract`].
///
/// [`EthereumClient::deploy_contract`]: crate::ethereum::EthereumClient::deploy_contract
#[derive(Clone)]
pub struct DeployedContract {
    /// Address the node reported in the deployment receipt.
    address: Address,
    /// The deployment receipt.
    receipt: TransactionReceipt,
    /// ABI-bound instance for subsequent dynamic calls.
    instance: ContractInstance<HttpProvider>,
}

impl DeployedContract {
    /// Build a handle from a mined deployment receipt.
    ///
    /// Fails if the receipt carries no contract address.
    pub fn from_receipt(
        abi: JsonAbi,
        receipt: TransactionReceipt,
        provider: HttpProvider,
    ) -> Result<Self> {
        let address = receipt
            .contract_address
            .ok_or_else(|| AppError::Deploy("receipt contains no contract address".into()))?;

        let instance = ContractInstance::new(address, provider, Interface::new(abi));

        Ok(Self { address, receipt, instance })
    }

    /// Get the deployed contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get the deployment receipt.
    pub fn receipt(&self) -> &TransactionReceipt {
        &self.receipt
    }

    /// Get the ABI-bound contract instance.
    pub fn instance(&self) -> &ContractInstance<HttpProvider> {
        &self.instance
    }
}

impl std::fmt::Debug for DeployedContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployedContract").field("address", &self.address).finish()
    }
}
