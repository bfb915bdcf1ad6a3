use alloy::primitives::{address, Address};

use crate::feeds::dto::FeedEntry;

// Chainlink USD price feeds on Base mainnet
pub const BASE_PRICE_FEEDS: [FeedEntry; 4] = [
    FeedEntry {
        symbol: "ETH",
        address: address!("0x71041dddad3595F7452727923F21707a2E0b1285"),
    },
    FeedEntry {
        symbol: "BTC",
        address: address!("0xc333e631F6D186fE41343749176334C34503B433"),
    },
    FeedEntry {
        symbol: "LINK",
        address: address!("0xd2D8e9e8F4A8087597D32e6E390B99D0f24d2850"),
    },
    FeedEntry {
        symbol: "USDC",
        address: address!("0x7e860098F58bBFC8648a4311b374B1D669a2bc6B"),
    },
];

/// Read-only symbol → feed address table. Built once at startup and shared.
#[derive(Debug, Clone)]
pub struct FeedRegistry {
    entries: Vec<FeedEntry>,
}

impl Default for FeedRegistry {
    fn default() -> Self {
        Self::new(BASE_PRICE_FEEDS.to_vec())
    }
}

impl FeedRegistry {
    pub fn new(entries: Vec<FeedEntry>) -> Self {
        Self { entries }
    }

    pub fn resolve_address(&self, symbol: &str) -> Option<Address> {
        let symbol = symbol.to_uppercase();

        self.entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.address)
    }

    /// Supported symbols in table order.
    pub fn list_symbols(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.symbol).collect()
    }
}
