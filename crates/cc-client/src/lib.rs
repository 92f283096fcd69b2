//! # cc-client
//!
//! A pure CryptoCompare min-API client for Rust with no storage dependencies.
//!
//! ## Features
//!
//! - **Clean API**: Simple, idiomatic Rust interface
//! - **Async/Await**: Built on tokio
//! - **Type Safe**: Strongly typed responses using cc-models
//! - **Configurable**: Environment-based configuration via cc-core
//! - **Readable parameters**: Logical option names are translated to the
//!   API's abbreviated wire names (`from_sym` -> `fsym`, `tc` ->
//!   `tryConversion`) when the request URL is built
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cc_client::CryptoCompareClient;
//! use cc_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = CryptoCompareClient::new(config)?;
//!
//!     // Current price of BTC in USD and EUR
//!     let prices = client.price().find("BTC", vec!["USD", "EUR"], &Default::default()).await?;
//!     println!("BTC/USD: {}", prices["BTC"]["USD"]);
//!
//!     // Daily candles
//!     let candles = client.history().day("BTC", "USD", &Default::default()).await?;
//!     println!("Latest close: {:?}", candles.data.last().map(|p| p.close));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Exchange names
//!
//! The API matches exchange names case-sensitively. Methods that take market
//! names (`price().generate_avg`) normalize them through the bundled
//! exchange table, so `"coinbase"` and `"Coinbase"` both work; names the
//! table does not know are sent as given.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cc_core::Error>` for consistent error
//! handling across the cc-* ecosystem. API-level failures (HTTP 200 with an
//! `Error` envelope) surface as `cc_core::Error::Api`.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use cc_core::{Config, Error, Result};
pub use cc_models::*;
pub use client::CryptoCompareClient;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  coins::CoinEndpoints,
  exchanges::ExchangeEndpoints,
  history::{HistoryEndpoints, HistoryOptions},
  news::NewsEndpoints,
  price::{
    DayAvgOptions, GenerateAvgOptions, HistoricalPriceOptions, PriceEndpoints, PriceOptions,
  },
  stats::StatsEndpoints,
  top_pairs::{TopPairsEndpoints, TopPairsOptions},
};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_configuration() {
    let config = Config::default_with_base_url("http://127.0.0.1:8080".to_string());
    // Test that we can create the client configuration
    assert_eq!(config.base_url, "http://127.0.0.1:8080");
  }
}
