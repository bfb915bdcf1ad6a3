use std::sync::atomic::{AtomicUsize, Ordering};

use alloy::primitives::{aliases::U80, Address, I256, U256};
use async_trait::async_trait;

use crate::{chain::reader::FeedReader, error::FetchError, price::dto::RoundData};

/// In-memory aggregator that counts every read.
pub(crate) struct StubReader {
    pub round_id: u64,
    pub answer: &'static str,
    pub updated_at: u64,
    pub decimals: u8,
    pub fail: bool,
    calls: AtomicUsize,
}

impl StubReader {
    pub fn new(answer: &'static str, decimals: u8) -> Self {
        Self {
            round_id: 42,
            answer,
            updated_at: 1_700_000_000,
            decimals,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new("0", 8)
        }
    }

    pub fn with_updated_at(mut self, updated_at: u64) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedReader for StubReader {
    async fn latest_round_data(&self, _feed: Address) -> Result<RoundData, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FetchError::Malformed("execution reverted".to_string()));
        }

        Ok(RoundData {
            round_id: U80::from(self.round_id),
            answer: I256::from_dec_str(self.answer)
                .map_err(|e| FetchError::Malformed(e.to_string()))?,
            started_at: U256::from(self.updated_at),
            updated_at: U256::from(self.updated_at),
            answered_in_round: U80::from(self.round_id),
        })
    }

    async fn decimals(&self, _feed: Address) -> Result<u8, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.decimals)
    }
}
