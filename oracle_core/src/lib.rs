pub mod chain;
pub mod config;
pub mod error;
pub mod feeds;
pub mod formatter;
pub mod helpers;
pub mod price;
pub mod router;
