//! Configuration management for the CryptoCompare client

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use dotenvy::dotenv;

/// Main configuration struct for the CryptoCompare client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL for the min-API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {

    dotenv().ok();

    let base_url =
      env::var("CRYPTOCOMPARE_BASE_URL").unwrap_or_else(|_| crate::MIN_API_BASE_URL.to_string());

    url::Url::parse(&base_url)
      .map_err(|_| Error::Config(format!("Invalid CRYPTOCOMPARE_BASE_URL: {}", base_url)))?;

    let timeout_secs = env::var("CRYPTOCOMPARE_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid CRYPTOCOMPARE_TIMEOUT_SECS".to_string()))?;

    Ok(Config { base_url, timeout_secs })
  }

  /// Create a config pointed at a custom base URL (for testing)
  pub fn default_with_base_url(base_url: String) -> Self {
    Config { base_url, timeout_secs: 30 }
  }
}

impl Default for Config {
  fn default() -> Self {
    Config { base_url: crate::MIN_API_BASE_URL.to_string(), timeout_secs: 30 }
  }
}
