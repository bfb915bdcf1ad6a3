pub mod bot_commands;
