//! Telegram side of the price bot: adapts messages for the router and sends replies.
use anyhow::Result as AnyResult;
use oracle_core::formatter::{dto::CommandResponse, helpers::help_message};
use teloxide::{
    prelude::*,
    types::{ChatId, ParseMode},
};

use crate::{
    bot::helpers::{reply_to_html, render_embed_html, to_bot_message},
    dependencies::BotDependencies,
};

pub async fn handle_help(bot: Bot, msg: Message, bot_deps: BotDependencies) -> AnyResult<()> {
    let registry = bot_deps.router.fetcher().registry();

    bot.send_message(msg.chat.id, help_message(registry)).await?;
    Ok(())
}

pub async fn handle_message(bot: Bot, msg: Message, bot_deps: BotDependencies) -> AnyResult<()> {
    let Some(message) = to_bot_message(&msg) else {
        return Ok(());
    };

    if let Some(response) = bot_deps.router.handle_message(&message).await {
        send_response(&bot, msg.chat.id, &response).await?;
    }

    Ok(())
}

async fn send_response(bot: &Bot, chat_id: ChatId, response: &CommandResponse) -> AnyResult<()> {
    bot.send_message(chat_id, reply_to_html(&response.text))
        .parse_mode(ParseMode::Html)
        .await?;

    for embed in response.embeds.iter().flatten() {
        bot.send_message(chat_id, render_embed_html(embed))
            .parse_mode(ParseMode::Html)
            .await?;
    }

    Ok(())
}
