use alloy::primitives::Address;
use async_trait::async_trait;

use crate::{error::FetchError, price::dto::RoundData};

/// Read-only access to Chainlink `AggregatorV3Interface` contracts.
#[async_trait]
pub trait FeedReader: Send + Sync + 'static {
    async fn latest_round_data(&self, feed: Address) -> Result<RoundData, FetchError>;

    async fn decimals(&self, feed: Address) -> Result<u8, FetchError>;
}
