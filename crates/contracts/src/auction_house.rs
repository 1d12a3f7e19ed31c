//! Bindings for the auction house contract. Only the constructor and the
//! functions this workspace calls are declared; the creation bytecode comes
//! from a compiled artifact at runtime (see [`crate::artifact`]).

/// Name of the contract, which is also the file stem of its artifact.
pub const CONTRACT_NAME: &str = "GainfulAuctionSeries2";

alloy::sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract GainfulAuctionSeries2 {
        constructor(
            string uri,
            string name,
            string symbol,
            address auctioneer,
            address protocol,
            uint256 bid_fee
        );

        function startAuction(
            string auction_name,
            uint256 starting_price,
            string uri_path,
            uint256 auctionDurationHours,
            uint256 extensionPeriodHours,
            uint256 minimumBidIncrement,
            uint256 bidDifferenceSplit,
            address bidToken,
            uint256 maximumBidIncrement
        ) external;
    }
}

pub type Instance =
    GainfulAuctionSeries2::GainfulAuctionSeries2Instance<alloy::providers::DynProvider>;
