use thiserror::Error;

/// Failure while reading a feed contract. Never shown to chat users.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("RPC call failed: {0}")]
    Rpc(#[from] alloy::contract::Error),
    #[error("Malformed feed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL ({value}): {reason}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        reason: String,
    },
}
