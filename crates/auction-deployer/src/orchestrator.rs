//! Deploys the auction house, starts its auction and reports the outcome.
//!
//! Both steps are attempted exactly once. A contract whose auction could not
//! be started is left on-chain unconfigured; its address is part of the
//! error so the operator can pick it up manually.

use {
    crate::{config::Plan, traits::Deployer},
    alloy::primitives::{Address, TxHash},
    std::io::Write,
    tracing::instrument,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub address: Address,
    pub start_auction_tx: TxHash,
}

/// Failure of one of the two collaborator calls. Displays as the
/// collaborator's message without any prefix.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0:#}")]
    Deploy(anyhow::Error),
    #[error("{error:#}")]
    StartAuction {
        /// The contract that was deployed but not configured.
        address: Address,
        error: anyhow::Error,
    },
}

#[instrument(skip_all, fields(contract = %plan.contract_name))]
pub async fn run(deployer: &dyn Deployer, plan: &Plan) -> Result<Deployment, Error> {
    let request = plan.deployment_request();
    tracing::debug!(args = ?request.constructor_args, "deploying contract");
    let auction_house = deployer.deploy(request).await.map_err(Error::Deploy)?;
    let address = auction_house.address();
    tracing::info!(?address, "contract deployed");

    let start_auction_tx = auction_house
        .start_auction(plan.auction_start_request())
        .await
        .map_err(|error| {
            tracing::warn!(?address, "contract deployed but auction not started");
            Error::StartAuction { address, error }
        })?;
    tracing::info!(?start_auction_tx, "auction started");

    Ok(Deployment {
        address,
        start_auction_tx,
    })
}

/// Writes the single output line for `outcome`.
pub fn report(outcome: &Result<Deployment, Error>, out: &mut impl Write) -> std::io::Result<()> {
    match outcome {
        Ok(deployment) => writeln!(out, "address: {}", deployment.address),
        Err(err) => writeln!(out, "{err}"),
    }
}

/// Runs the deployment and reports its outcome to `out`. Collaborator
/// failures end up in `out` and are never returned.
pub async fn deploy_and_report(deployer: &dyn Deployer, plan: &Plan, out: &mut impl Write) {
    let outcome = run(deployer, plan).await;
    if let Err(err) = report(&outcome, out) {
        tracing::error!(?err, "failed to write deployment outcome");
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::traits::{AuctionHouse, AuctionStartRequest, MockAuctionHouse, MockDeployer},
        alloy::{primitives::address, sol_types::SolCall},
        anyhow::anyhow,
    };

    const DEPLOYED: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");

    fn auction_house() -> MockAuctionHouse {
        let mut auction_house = MockAuctionHouse::new();
        auction_house.expect_address().return_const(DEPLOYED);
        auction_house
    }

    fn deployer_returning(auction_house: MockAuctionHouse) -> MockDeployer {
        let expected_args = Plan::default().deployment_request();
        let mut deployer = MockDeployer::new();
        deployer
            .expect_deploy()
            .times(1)
            .withf(move |request| *request == expected_args)
            .return_once(move |_| Ok(Box::new(auction_house) as Box<dyn AuctionHouse>));
        deployer
    }

    async fn output(deployer: &MockDeployer) -> String {
        let mut out = Vec::new();
        deploy_and_report(deployer, &Plan::default(), &mut out).await;
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn reports_address_after_starting_auction() {
        let mut auction_house = auction_house();
        let expected_call = Plan::default().auction_start_request().to_call().abi_encode();
        auction_house
            .expect_start_auction()
            .times(1)
            .withf(move |request: &AuctionStartRequest| {
                request.to_call().abi_encode() == expected_call
            })
            .returning(|_| Ok(TxHash::repeat_byte(1)));
        let deployer = deployer_returning(auction_house);

        assert_eq!(output(&deployer).await, format!("address: {DEPLOYED}\n"));
    }

    #[tokio::test]
    async fn reports_deployment_failure() {
        let mut deployer = MockDeployer::new();
        deployer
            .expect_deploy()
            .times(1)
            .return_once(|_| Err(anyhow!("boom")));

        assert_eq!(output(&deployer).await, "boom\n");
    }

    #[tokio::test]
    async fn reports_auction_failure_without_address_line() {
        let mut auction_house = auction_house();
        auction_house
            .expect_start_auction()
            .times(1)
            .returning(|_| Err(anyhow!("auction failed")));
        let deployer = deployer_returning(auction_house);

        let output = output(&deployer).await;
        assert_eq!(output, "auction failed\n");
        assert!(!output.contains("address:"));
    }

    #[tokio::test]
    async fn distinguishes_failing_step() {
        let mut deployer = MockDeployer::new();
        deployer
            .expect_deploy()
            .return_once(|_| Err(anyhow!("boom")));
        assert!(matches!(
            run(&deployer, &Plan::default()).await,
            Err(Error::Deploy(_))
        ));

        let mut auction_house = auction_house();
        auction_house
            .expect_start_auction()
            .returning(|_| Err(anyhow!("auction failed")));
        let deployer = deployer_returning(auction_house);
        assert!(matches!(
            run(&deployer, &Plan::default()).await,
            Err(Error::StartAuction { address, .. }) if address == DEPLOYED
        ));
    }

    #[tokio::test]
    async fn reports_error_context_chain() {
        let mut deployer = MockDeployer::new();
        deployer
            .expect_deploy()
            .return_once(|_| {
                Err(anyhow!("insufficient funds").context("failed to send deployment transaction"))
            });

        assert_eq!(
            output(&deployer).await,
            "failed to send deployment transaction: insufficient funds\n"
        );
    }
}
