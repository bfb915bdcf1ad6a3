use alloy::primitives::{aliases::U80, I256, U256};
use serde::Serialize;

use crate::error::FetchError;

/// Raw `latestRoundData()` result of an aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundData {
    pub round_id: U80,
    pub answer: I256,
    pub started_at: U256,
    pub updated_at: U256,
    pub answered_in_round: U80,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    pub symbol: String,
    /// USD price with exactly two fraction digits.
    pub price: String,
    pub decimals: u8,
    /// Seconds since epoch of the feed's last update.
    pub timestamp: u64,
    pub round_id: u128,
}

#[derive(Debug)]
pub enum PriceOutcome {
    Found(PriceData),
    NotFound,
    FetchFailed(FetchError),
}

impl PriceOutcome {
    /// Collapses both failure kinds into `None`.
    pub fn into_price(self) -> Option<PriceData> {
        match self {
            PriceOutcome::Found(data) => Some(data),
            PriceOutcome::NotFound | PriceOutcome::FetchFailed(_) => None,
        }
    }
}
