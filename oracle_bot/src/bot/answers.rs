use anyhow::Result;
use oracle_core::helpers::bot_commands::Command;
use teloxide::{Bot, types::Message};

use super::handler::{handle_help, handle_message};
use crate::dependencies::BotDependencies;

pub async fn answers(
    bot: Bot,
    msg: Message,
    cmd: Command,
    bot_deps: BotDependencies,
) -> Result<()> {
    match cmd {
        Command::Help => handle_help(bot, msg, bot_deps).await?,
        Command::Price(_) => handle_message(bot, msg, bot_deps).await?,
    };

    Ok(())
}
