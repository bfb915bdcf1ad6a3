use alloy::primitives::Address;

/// One supported ticker and the aggregator contract that reports its USD price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedEntry {
    pub symbol: &'static str,
    pub address: Address,
}
