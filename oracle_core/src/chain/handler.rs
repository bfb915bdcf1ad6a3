use alloy::{
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    sol,
};
use async_trait::async_trait;
use reqwest::Url;

use crate::{chain::reader::FeedReader, error::FetchError, price::dto::RoundData};

sol! {
    #[sol(rpc)]
    interface IAggregatorV3 {
        function decimals() external view returns (uint8);

        function latestRoundData()
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );
    }
}

/// `FeedReader` backed by an HTTP JSON-RPC endpoint.
#[derive(Clone)]
pub struct ChainlinkReader {
    provider: DynProvider,
}

impl ChainlinkReader {
    pub fn new(rpc_url: Url) -> Self {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(rpc_url)
            .erased();

        Self { provider }
    }
}

#[async_trait]
impl FeedReader for ChainlinkReader {
    async fn latest_round_data(&self, feed: Address) -> Result<RoundData, FetchError> {
        let aggregator = IAggregatorV3::new(feed, self.provider.clone());
        let round = aggregator.latestRoundData().call().await?;

        Ok(RoundData {
            round_id: round.roundId,
            answer: round.answer,
            started_at: round.startedAt,
            updated_at: round.updatedAt,
            answered_in_round: round.answeredInRound,
        })
    }

    async fn decimals(&self, feed: Address) -> Result<u8, FetchError> {
        let aggregator = IAggregatorV3::new(feed, self.provider.clone());
        let decimals = aggregator.decimals().call().await?;

        Ok(decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{I256, U256};
    use serde_json::{json, Value};
    use wiremock::{
        matchers::method, Mock, MockServer, Request, Respond, ResponseTemplate,
    };

    const LATEST_ROUND_DATA_SELECTOR: &str = "0xfeaf968c";
    const DECIMALS_SELECTOR: &str = "0x313ce567";

    fn word(value: u64) -> String {
        format!("{:064x}", value)
    }

    /// Answers `eth_call`s the way a Chainlink aggregator would.
    struct AggregatorRpc {
        round_id: u64,
        answer: u64,
        updated_at: u64,
        decimals: u64,
    }

    impl Respond for AggregatorRpc {
        fn respond(&self, request: &Request) -> ResponseTemplate {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            let call = &body["params"][0];
            let input = call
                .get("input")
                .or_else(|| call.get("data"))
                .and_then(Value::as_str)
                .unwrap_or_default();

            let result = if input.starts_with(LATEST_ROUND_DATA_SELECTOR) {
                format!(
                    "0x{}{}{}{}{}",
                    word(self.round_id),
                    word(self.answer),
                    word(self.updated_at),
                    word(self.updated_at),
                    word(self.round_id)
                )
            } else if input.starts_with(DECIMALS_SELECTOR) {
                format!("0x{}", word(self.decimals))
            } else {
                return ResponseTemplate::new(200).set_body_json(json!({
                    "jsonrpc": "2.0",
                    "id": body["id"],
                    "error": { "code": -32601, "message": "unexpected call" }
                }));
            };

            ResponseTemplate::new(200).set_body_json(json!({
                "jsonrpc": "2.0",
                "id": body["id"],
                "result": result
            }))
        }
    }

    fn reader_for(server: &MockServer) -> ChainlinkReader {
        ChainlinkReader::new(Url::parse(&server.uri()).unwrap())
    }

    #[tokio::test]
    async fn test_reads_latest_round_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(AggregatorRpc {
                round_id: 42,
                answer: 300_000_000_000,
                updated_at: 1_700_000_000,
                decimals: 8,
            })
            .mount(&server)
            .await;

        let reader = reader_for(&server);
        let round = reader
            .latest_round_data(Address::repeat_byte(0x22))
            .await
            .unwrap();

        assert_eq!(round.round_id.to::<u128>(), 42);
        assert_eq!(round.answer, I256::from_dec_str("300000000000").unwrap());
        assert_eq!(round.updated_at, U256::from(1_700_000_000u64));
        assert_eq!(round.answered_in_round.to::<u128>(), 42);
    }

    #[tokio::test]
    async fn test_reads_decimals() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(AggregatorRpc {
                round_id: 1,
                answer: 1,
                updated_at: 1,
                decimals: 18,
            })
            .mount(&server)
            .await;

        let reader = reader_for(&server);

        assert_eq!(reader.decimals(Address::repeat_byte(0x22)).await.unwrap(), 18);
    }

    #[tokio::test]
    async fn test_node_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let reader = reader_for(&server);
        let result = reader.decimals(Address::repeat_byte(0x22)).await;

        assert!(matches!(result, Err(FetchError::Rpc(_))));
    }
}
