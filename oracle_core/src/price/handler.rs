use std::sync::Arc;

use alloy::primitives::I256;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    chain::reader::FeedReader,
    error::FetchError,
    feeds::handler::FeedRegistry,
    price::dto::{PriceData, PriceOutcome, RoundData},
};

#[derive(Clone)]
pub struct PriceFetcher {
    registry: Arc<FeedRegistry>,
    reader: Arc<dyn FeedReader>,
}

impl PriceFetcher {
    pub fn new(registry: Arc<FeedRegistry>, reader: Arc<dyn FeedReader>) -> Self {
        Self { registry, reader }
    }

    pub fn registry(&self) -> &FeedRegistry {
        &self.registry
    }

    /// Latest USD price for `symbol`. Unknown symbols never reach the network.
    pub async fn fetch_price(&self, symbol: &str) -> PriceOutcome {
        let symbol = symbol.to_uppercase();

        let Some(feed) = self.registry.resolve_address(&symbol) else {
            return PriceOutcome::NotFound;
        };

        let reads = tokio::try_join!(
            self.reader.latest_round_data(feed),
            self.reader.decimals(feed)
        );

        let result = reads.and_then(|(round, decimals)| build_price_data(&symbol, round, decimals));

        match result {
            Ok(data) => PriceOutcome::Found(data),
            Err(e) => {
                log::error!("Error fetching price for {} from {}: {}", symbol, feed, e);
                PriceOutcome::FetchFailed(e)
            }
        }
    }
}

fn build_price_data(symbol: &str, round: RoundData, decimals: u8) -> Result<PriceData, FetchError> {
    let price = scale_answer(round.answer, decimals)?;
    let timestamp = u64::try_from(round.updated_at)
        .ok()
        .filter(|ts| {
            i64::try_from(*ts)
                .ok()
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
                .is_some()
        })
        .ok_or_else(|| {
            FetchError::Malformed(format!("updatedAt out of range: {}", round.updated_at))
        })?;

    Ok(PriceData {
        symbol: symbol.to_string(),
        price: format_usd(price)?,
        decimals,
        timestamp,
        round_id: round.round_id.to::<u128>(),
    })
}

/// Two fraction digits, ties on the exact binary value rounded away from zero.
pub fn format_usd(price: f64) -> Result<String, FetchError> {
    let exact = Decimal::from_f64_retain(price)
        .ok_or_else(|| FetchError::Malformed(format!("price {} not representable", price)))?;
    let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(format!("{:.2}", rounded))
}

/// answer / 10^decimals in f64. Loses precision once the answer exceeds 2^53.
pub fn scale_answer(answer: I256, decimals: u8) -> Result<f64, FetchError> {
    let answer = answer
        .to_string()
        .parse::<f64>()
        .map_err(|e| FetchError::Malformed(format!("answer {}: {}", answer, e)))?;

    Ok(answer / 10f64.powi(decimals as i32))
}
