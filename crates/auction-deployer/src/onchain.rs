//! [`Deployer`] and [`AuctionHouse`] backed by a real node.

use {
    crate::traits::{AuctionHouse, AuctionStartRequest, Deployer, DeploymentRequest},
    alloy::{
        network::TransactionBuilder,
        primitives::{Address, TxHash},
        providers::Provider,
        rpc::types::{TransactionReceipt, TransactionRequest},
    },
    anyhow::{Context, Result, ensure},
    contracts::{ContractArtifact, auction_house},
    ethrpc::AlloyProvider,
    std::path::PathBuf,
};

pub struct OnchainDeployer {
    provider: AlloyProvider,
    /// Directory holding `<ContractName>.json` artifacts.
    artifacts: PathBuf,
    confirmations: u64,
}

impl OnchainDeployer {
    pub fn new(provider: AlloyProvider, artifacts: PathBuf, confirmations: u64) -> Self {
        Self {
            provider,
            artifacts,
            confirmations,
        }
    }
}

#[async_trait::async_trait]
impl Deployer for OnchainDeployer {
    async fn deploy(&self, request: DeploymentRequest) -> Result<Box<dyn AuctionHouse>> {
        let artifact = ContractArtifact::load(&self.artifacts, &request.contract_name).await?;
        let code = artifact.deployment_code(&request.constructor_args)?;

        let tx = TransactionRequest::default().with_deploy_code(code);
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("failed to send deployment transaction")?;
        tracing::debug!(tx_hash = ?pending.tx_hash(), "deployment transaction sent");

        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .context("failed to get deployment receipt")?;
        let address = deployed_address(&receipt)?;
        tracing::debug!(
            ?address,
            tx_hash = ?receipt.transaction_hash,
            block = ?receipt.block_number,
            "deployment transaction confirmed"
        );

        Ok(Box::new(OnchainAuctionHouse {
            instance: auction_house::Instance::new(address, self.provider.clone()),
            confirmations: self.confirmations,
        }))
    }
}

pub struct OnchainAuctionHouse {
    instance: auction_house::Instance,
    confirmations: u64,
}

#[async_trait::async_trait]
impl AuctionHouse for OnchainAuctionHouse {
    fn address(&self) -> Address {
        *self.instance.address()
    }

    async fn start_auction(&self, request: AuctionStartRequest) -> Result<TxHash> {
        let call = request.to_call();
        let pending = self
            .instance
            .call_builder(&call)
            .send()
            .await
            .context("failed to send startAuction transaction")?;
        tracing::debug!(tx_hash = ?pending.tx_hash(), "startAuction transaction sent");

        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .context("failed to get startAuction receipt")?;
        confirmed("startAuction", &receipt)
    }
}

/// Hash of a mined transaction, or an error if it reverted.
fn confirmed(label: &str, receipt: &TransactionReceipt) -> Result<TxHash> {
    ensure!(
        receipt.status(),
        "{label} transaction reverted: {:?}",
        receipt.transaction_hash
    );
    Ok(receipt.transaction_hash)
}

fn deployed_address(receipt: &TransactionReceipt) -> Result<Address> {
    confirmed("deployment", receipt)?;
    receipt
        .contract_address
        .context("deployment receipt contains no contract address")
}
