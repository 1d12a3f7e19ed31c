//! Trait definitions for the blockchain boundary.
//!
//! The orchestrator only talks to these traits so it can be unit tested
//! with mocks.

use {
    alloy::{
        dyn_abi::DynSolValue,
        primitives::{Address, TxHash, U256},
    },
    anyhow::Result,
    contracts::GainfulAuctionSeries2,
    serde::Deserialize,
    serde_with::{DisplayFromStr, serde_as},
};

/// A contract to deploy together with its ordered constructor arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentRequest {
    pub contract_name: String,
    pub constructor_args: Vec<DynSolValue>,
}

/// Parameters of the auction started right after deployment.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct AuctionStartRequest {
    pub auction_name: String,
    /// Decimal string, it does not fit into any native integer.
    #[serde_as(as = "DisplayFromStr")]
    pub starting_price: U256,
    pub metadata_path: String,
    pub duration_hours: u64,
    pub extension_hours: u64,
    pub minimum_bid_increment: u64,
    /// Share of the difference between consecutive bids, in basis points.
    pub bid_difference_split_bps: u64,
    /// `Address::ZERO` means bids are placed in the native currency.
    pub bid_token: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub maximum_bid_increment: U256,
}

impl AuctionStartRequest {
    /// Arranges the parameters in the order `startAuction` expects them.
    pub fn to_call(&self) -> GainfulAuctionSeries2::startAuctionCall {
        GainfulAuctionSeries2::startAuctionCall {
            auction_name: self.auction_name.clone(),
            starting_price: self.starting_price,
            uri_path: self.metadata_path.clone(),
            auctionDurationHours: U256::from(self.duration_hours),
            extensionPeriodHours: U256::from(self.extension_hours),
            minimumBidIncrement: U256::from(self.minimum_bid_increment),
            bidDifferenceSplit: U256::from(self.bid_difference_split_bps),
            bidToken: self.bid_token,
            maximumBidIncrement: self.maximum_bid_increment,
        }
    }
}

/// Publishes contracts to the chain.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Deployer: Send + Sync {
    /// Deploys the contract and resolves once the creation transaction is
    /// confirmed. There is no timeout.
    async fn deploy(&self, request: DeploymentRequest) -> Result<Box<dyn AuctionHouse>>;
}

/// Handle to a deployed auction house contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AuctionHouse: Send + Sync {
    fn address(&self) -> Address;

    /// Sends the `startAuction` transaction and returns its hash once it is
    /// confirmed.
    async fn start_auction(&self, request: AuctionStartRequest) -> Result<TxHash>;
}
