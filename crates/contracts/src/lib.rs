pub mod artifact;
pub mod auction_house;

pub use {artifact::ContractArtifact, auction_house::GainfulAuctionSeries2};
