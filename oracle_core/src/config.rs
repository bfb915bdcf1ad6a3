use std::env;

use reqwest::Url;

use crate::error::ConfigError;

pub const RPC_URL_ENV: &str = "BASE_RPC_URL";
pub const DEFAULT_BASE_RPC_URL: &str = "https://mainnet.base.org";

#[derive(Debug, Clone)]
pub struct OracleConfig {
    pub rpc_url: Url,
}

impl OracleConfig {
    /// Reads `BASE_RPC_URL`, falling back to the public Base endpoint.
    /// Expects `.env` to have been loaded by the caller.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var(RPC_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_RPC_URL.to_string());

        Self::from_rpc_url(&raw)
    }

    pub fn from_rpc_url(raw: &str) -> Result<Self, ConfigError> {
        let rpc_url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
            name: RPC_URL_ENV,
            value: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { rpc_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_parses() {
        let config = OracleConfig::from_rpc_url(DEFAULT_BASE_RPC_URL).unwrap();
        assert_eq!(config.rpc_url.host_str(), Some("mainnet.base.org"));
    }

    #[test]
    fn test_url_is_trimmed() {
        let config = OracleConfig::from_rpc_url("  http://localhost:8545 \n").unwrap();
        assert_eq!(config.rpc_url.as_str(), "http://localhost:8545/");
    }

    #[test]
    fn test_invalid_url() {
        let err = OracleConfig::from_rpc_url("not a url").unwrap_err();
        assert!(err.to_string().contains(RPC_URL_ENV));
        assert!(err.to_string().contains("not a url"));
    }
}
