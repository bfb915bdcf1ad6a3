use chrono::{DateTime, SecondsFormat};

use crate::{
    feeds::handler::FeedRegistry,
    formatter::dto::{Embed, EmbedField},
    price::dto::PriceData,
};

pub const NETWORK_NAME: &str = "Base";
pub const ORACLE_NAME: &str = "Chainlink";
pub const EMBED_COLOR: u32 = 0x375c7f;

pub fn format_price(data: &PriceData) -> String {
    format!(
        "💰 **{}/USD**: ${}\n_Verified by {} on {} 🔵_",
        data.symbol, data.price, ORACLE_NAME, NETWORK_NAME
    )
}

pub fn unsupported_symbol_message(registry: &FeedRegistry) -> String {
    format!(
        "❌ Symbol not supported. Available symbols: {}",
        registry.list_symbols().join(", ")
    )
}

pub fn missing_symbol_message(registry: &FeedRegistry) -> String {
    format!(
        "❌ Please specify a symbol. Usage: /price [{}]",
        registry.list_symbols().join("|")
    )
}

pub fn help_message(registry: &FeedRegistry) -> String {
    format!(
        "Towns Oracle Price Bot Help\n\n\
         Available Commands:\n\
         /price [SYMBOL] - Get the current price for a crypto asset\n\n\
         Supported Symbols: {}\n\n\
         Example:\n\
         /price ETH - Get the ETH/USD price\n\n\
         Powered by {} Oracles on {} Network",
        registry.list_symbols().join(", "),
        ORACLE_NAME,
        NETWORK_NAME
    )
}

pub fn price_embed(data: &PriceData) -> Embed {
    Embed {
        title: format!("{}/USD Price", data.symbol),
        description: format!("${}", data.price),
        fields: vec![
            EmbedField {
                name: "Network".to_string(),
                value: NETWORK_NAME.to_string(),
                inline: true,
            },
            EmbedField {
                name: "Oracle".to_string(),
                value: ORACLE_NAME.to_string(),
                inline: true,
            },
            EmbedField {
                name: "Round ID".to_string(),
                value: data.round_id.to_string(),
                inline: true,
            },
        ],
        timestamp: iso_timestamp(data.timestamp),
        color: EMBED_COLOR,
    }
}

/// `2023-11-14T22:13:20.000Z` style. Out-of-range values clamp to the epoch.
pub fn iso_timestamp(seconds: u64) -> String {
    let seconds = i64::try_from(seconds).unwrap_or_default();

    DateTime::from_timestamp(seconds, 0)
        .unwrap_or_default()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
