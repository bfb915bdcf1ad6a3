use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "Get the current USD price for a crypto asset, e.g. /price ETH.")]
    Price(String),
    #[command(description = "Display this text.")]
    Help,
}
