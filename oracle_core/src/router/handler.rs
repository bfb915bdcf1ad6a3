use crate::{
    formatter::{
        dto::CommandResponse,
        helpers::{format_price, missing_symbol_message, price_embed, unsupported_symbol_message},
    },
    price::{dto::PriceOutcome, handler::PriceFetcher},
    router::dto::BotMessage,
};

pub const PRICE_COMMAND: &str = "/price";

#[derive(Clone)]
pub struct CommandRouter {
    fetcher: PriceFetcher,
}

impl CommandRouter {
    pub fn new(fetcher: PriceFetcher) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &PriceFetcher {
        &self.fetcher
    }

    /// `None` leaves the message to other handlers.
    pub async fn handle_message(&self, message: &BotMessage) -> Option<CommandResponse> {
        let text = message.text.trim();

        if !text.starts_with(PRICE_COMMAND) {
            return None;
        }

        let symbol = text.split_whitespace().nth(1).map(str::to_uppercase);

        let Some(symbol) = symbol else {
            return Some(CommandResponse::text(missing_symbol_message(
                self.fetcher.registry(),
            )));
        };

        log::info!("Price request for {} from {}", symbol, message.user);

        Some(self.handle_price_command(&symbol).await)
    }

    pub async fn handle_price_command(&self, symbol: &str) -> CommandResponse {
        let outcome = self.fetcher.fetch_price(symbol).await;

        self.price_reply(outcome)
    }

    // Fetch failures were already logged by the fetcher.
    fn price_reply(&self, outcome: PriceOutcome) -> CommandResponse {
        match outcome {
            PriceOutcome::Found(data) => {
                CommandResponse::with_embed(format_price(&data), price_embed(&data))
            }
            PriceOutcome::NotFound | PriceOutcome::FetchFailed(_) => {
                CommandResponse::text(unsupported_symbol_message(self.fetcher.registry()))
            }
        }
    }
}
