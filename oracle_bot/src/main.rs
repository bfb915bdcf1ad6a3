mod bot;
mod dependencies;

use std::{env, sync::Arc};

use anyhow::{Context, Result};
use oracle_core::{
    chain::handler::ChainlinkReader, config::OracleConfig, feeds::handler::FeedRegistry,
    helpers::bot_commands::Command, price::handler::PriceFetcher,
    router::handler::CommandRouter,
};
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::{bot::handler_tree::handler_tree, dependencies::BotDependencies};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        log::error!("❌ Failed to initialize bot: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    log::info!("🤖 Towns Protocol Chainlink Oracle Price Bot initializing...");

    let config = OracleConfig::from_env()?;
    let token = env::var("TELOXIDE_TOKEN").context("TELOXIDE_TOKEN not set")?;

    log::info!(
        "🔗 Connecting to Base network via {}...",
        config.rpc_url.host_str().unwrap_or("unknown host")
    );

    let registry = Arc::new(FeedRegistry::default());
    let reader = Arc::new(ChainlinkReader::new(config.rpc_url.clone()));
    let router = CommandRouter::new(PriceFetcher::new(registry.clone(), reader));

    let bot = Bot::new(token);
    bot.set_my_commands(Command::bot_commands())
        .await
        .context("Failed to register bot commands")?;

    let bot_deps = BotDependencies { router };

    log::info!("✅ Bot ready! Use /price [SYMBOL] to check prices");
    log::info!("📊 Supported symbols: {}", registry.list_symbols().join(", "));

    let mut dispatcher = Dispatcher::builder(bot, handler_tree())
        .dependencies(dptree::deps![bot_deps])
        .enable_ctrlc_handler()
        .build();

    let shutdown_token = dispatcher.shutdown_token();
    tokio::spawn(async move {
        wait_for_sigterm().await;
        if let Ok(stopped) = shutdown_token.shutdown() {
            stopped.await;
        }
    });

    dispatcher.dispatch().await;

    log::info!("🛑 Bot shutting down...");
    Ok(())
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
            log::info!("Received SIGTERM");
        }
        Err(e) => {
            log::warn!("Cannot listen for SIGTERM: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await;
}
