//! The deployment plan: which contract to deploy, with which constructor
//! arguments, and the auction to start afterwards.
//!
//! Without a config file the plan is [`Plan::default`], which is fixed and
//! independent of the environment. A TOML file can override any subset of
//! the values.

use {
    crate::traits::{AuctionStartRequest, DeploymentRequest},
    alloy::{
        dyn_abi::DynSolValue,
        primitives::{Address, U256, address, uint},
    },
    contracts::auction_house::CONTRACT_NAME,
    serde::Deserialize,
    std::path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Plan {
    /// Name of the contract, also used to find its compiled artifact.
    pub contract_name: String,
    pub constructor: ConstructorArgs,
    pub auction: AuctionStartRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConstructorArgs {
    /// Base URI under which token metadata is served.
    pub metadata_uri: String,
    pub name: String,
    pub symbol: String,
    pub auctioneer: Address,
    pub protocol: Address,
    pub bid_fee: u64,
}

impl Plan {
    pub fn deployment_request(&self) -> DeploymentRequest {
        DeploymentRequest {
            contract_name: self.contract_name.clone(),
            constructor_args: self.constructor.to_values(),
        }
    }

    pub fn auction_start_request(&self) -> AuctionStartRequest {
        self.auction.clone()
    }
}

impl ConstructorArgs {
    /// Constructor arguments in declaration order.
    pub fn to_values(&self) -> Vec<DynSolValue> {
        vec![
            DynSolValue::String(self.metadata_uri.clone()),
            DynSolValue::String(self.name.clone()),
            DynSolValue::String(self.symbol.clone()),
            DynSolValue::Address(self.auctioneer),
            DynSolValue::Address(self.protocol),
            DynSolValue::Uint(U256::from(self.bid_fee), 256),
        ]
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            contract_name: CONTRACT_NAME.to_string(),
            constructor: Default::default(),
            auction: Default::default(),
        }
    }
}

impl Default for ConstructorArgs {
    fn default() -> Self {
        Self {
            metadata_uri: "https://super-chief-sandwich.anvil.app/_/api/metadata/".to_string(),
            name: "GOFURS AuctionHouse".to_string(),
            symbol: "AUCTIONHOUSE".to_string(),
            auctioneer: address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            protocol: address!("0xfDF2e77F113a87D419b25659E8787AB019e5e0DA"),
            bid_fee: 0,
        }
    }
}

impl Default for AuctionStartRequest {
    fn default() -> Self {
        Self {
            auction_name: "nft".to_string(),
            starting_price: uint!(1_000_000_000_000_000_000_000_000_U256),
            metadata_path: "nft.json".to_string(),
            duration_hours: 12,
            extension_hours: 1,
            minimum_bid_increment: 12_000_000,
            bid_difference_split_bps: 5_000,
            bid_token: Address::ZERO,
            maximum_bid_increment: uint!(12_001_000_000_000_000_000_000_000_U256),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error while reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML syntax error while reading {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Loads a plan from a TOML file. Missing values fall back to
/// [`Plan::default`].
pub async fn load(path: &Path) -> Result<Plan, LoadError> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
    toml::de::from_str(&data).map_err(|source| LoadError::Toml {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::sol_types::SolCall,
        contracts::GainfulAuctionSeries2,
    };

    #[test]
    fn constructor_arguments_are_ordered_literals() {
        let request = Plan::default().deployment_request();

        assert_eq!(request.contract_name, "GainfulAuctionSeries2");
        assert_eq!(
            request.constructor_args,
            vec![
                DynSolValue::String("https://super-chief-sandwich.anvil.app/_/api/metadata/".into()),
                DynSolValue::String("GOFURS AuctionHouse".into()),
                DynSolValue::String("AUCTIONHOUSE".into()),
                DynSolValue::Address(address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")),
                DynSolValue::Address(address!("0xfDF2e77F113a87D419b25659E8787AB019e5e0DA")),
                DynSolValue::Uint(U256::ZERO, 256),
            ]
        );
    }

    #[test]
    fn start_auction_call_takes_literals_in_order() {
        let call = Plan::default().auction_start_request().to_call();

        let expected = GainfulAuctionSeries2::startAuctionCall {
            auction_name: "nft".into(),
            starting_price: "1000000000000000000000000".parse().unwrap(),
            uri_path: "nft.json".into(),
            auctionDurationHours: U256::from(12),
            extensionPeriodHours: U256::from(1),
            minimumBidIncrement: U256::from(12_000_000),
            bidDifferenceSplit: U256::from(5_000),
            bidToken: address!("0x0000000000000000000000000000000000000000"),
            maximumBidIncrement: "12001000000000000000000000".parse().unwrap(),
        };
        assert_eq!(call.abi_encode(), expected.abi_encode());
    }

    #[tokio::test]
    async fn file_overrides_a_subset_of_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.toml");
        std::fs::write(
            &path,
            r#"
            [constructor]
            symbol = "TEST"
            bid-fee = 25

            [auction]
            starting-price = "5000"
            bid-token = "0x6B175474E89094C44Da98b954EedeAC495271d0F"
            "#,
        )
        .unwrap();

        let plan = load(&path).await.unwrap();
        let default = Plan::default();
        assert_eq!(plan.contract_name, default.contract_name);
        assert_eq!(plan.constructor.symbol, "TEST");
        assert_eq!(plan.constructor.bid_fee, 25);
        assert_eq!(plan.constructor.name, default.constructor.name);
        assert_eq!(plan.auction.starting_price, U256::from(5_000));
        assert_eq!(
            plan.auction.bid_token,
            address!("0x6B175474E89094C44Da98b954EedeAC495271d0F")
        );
        assert_eq!(plan.auction.duration_hours, 12);
    }

    #[tokio::test]
    async fn file_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.toml");
        std::fs::write(&path, "[auction]\nreserve-price = \"1\"\n").unwrap();

        assert!(matches!(load(&path).await, Err(LoadError::Toml { .. })));
        assert!(matches!(
            load(&dir.path().join("missing.toml")).await,
            Err(LoadError::Io { .. })
        ));
    }
}
