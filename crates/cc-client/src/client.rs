/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The top-level [`CryptoCompareClient`] and its endpoint accessors.

use crate::endpoints::{
  coins::CoinEndpoints, exchanges::ExchangeEndpoints, history::HistoryEndpoints,
  news::NewsEndpoints, price::PriceEndpoints, stats::StatsEndpoints,
  top_pairs::TopPairsEndpoints,
};

use crate::transport::Transport;
use cc_core::{Config, Result};
use std::sync::Arc;

/// Main CryptoCompare min-API client
///
/// Provides access to all supported min-API resources through organized
/// endpoint modules. The client owns the HTTP transport; the endpoint
/// accessors are cheap and can be called per request.
///
/// # Examples
///
/// ```ignore
/// use cc_client::CryptoCompareClient;
/// use cc_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = CryptoCompareClient::new(config)?;
///
///     // Get current prices
///     let prices = client.price().find("BTC", vec!["USD", "EUR"], &Default::default()).await?;
///     println!("BTC/USD: {}", prices["BTC"]["USD"]);
///
///     // Get daily candles
///     let candles = client.history().day("BTC", "USD", &Default::default()).await?;
///     println!("{} candles", candles.data.len());
///
///     Ok(())
/// }
/// ```
pub struct CryptoCompareClient {
  transport: Arc<Transport>,
}

impl CryptoCompareClient {
  /// Create a new CryptoCompare min-API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing the base URL and timeout
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use cc_client::CryptoCompareClient;
  /// use cc_core::Config;
  ///
  /// let config = Config::from_env().expect("Invalid configuration");
  /// let client = CryptoCompareClient::new(config).expect("Failed to create client");
  /// ```
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport })
  }

  /// Get access to price endpoints
  ///
  /// Returns a `PriceEndpoints` instance for current, full, averaged and
  /// historical prices.
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let prices = client.price().find("BTC", "USD", &Default::default()).await?;
  /// let full = client.price().full("ETH", vec!["USD", "EUR"], &Default::default()).await?;
  /// ```
  pub fn price(&self) -> PriceEndpoints {
    PriceEndpoints::new(self.transport.clone())
  }

  /// Get access to OHLC candle history endpoints
  ///
  /// Returns a `HistoryEndpoints` instance for per-minute, hourly and daily
  /// candles.
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let candles = client.history().hour("BTC", "USD", &Default::default()).await?;
  /// ```
  pub fn history(&self) -> HistoryEndpoints {
    HistoryEndpoints::new(self.transport.clone())
  }

  /// Get access to coin metadata endpoints
  ///
  /// Returns a `CoinEndpoints` instance for the coin directory and per-pair
  /// snapshots.
  pub fn coins(&self) -> CoinEndpoints {
    CoinEndpoints::new(self.transport.clone())
  }

  /// Get access to the exchange directory endpoint
  ///
  /// Returns an `ExchangeEndpoints` instance listing every exchange and the
  /// pairs it trades.
  pub fn exchanges(&self) -> ExchangeEndpoints {
    ExchangeEndpoints::new(self.transport.clone())
  }

  /// Get access to news endpoints
  ///
  /// Returns a `NewsEndpoints` instance for articles and providers.
  pub fn news(&self) -> NewsEndpoints {
    NewsEndpoints::new(self.transport.clone())
  }

  /// Get access to the top pairs endpoint
  ///
  /// Returns a `TopPairsEndpoints` instance ranking pairs by 24h volume.
  pub fn top_pairs(&self) -> TopPairsEndpoints {
    TopPairsEndpoints::new(self.transport.clone())
  }

  /// Get access to API usage stats endpoints
  ///
  /// Returns a `StatsEndpoints` instance reporting calls made and calls
  /// left.
  pub fn stats(&self) -> StatsEndpoints {
    StatsEndpoints::new(self.transport.clone())
  }
}

impl std::fmt::Debug for CryptoCompareClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CryptoCompareClient").field("transport", &self.transport).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config {
      base_url: cc_core::MIN_API_BASE_URL.to_string(),
      timeout_secs: 30,
    };

    let client = CryptoCompareClient::new(config).expect("Failed to create client");
    assert_eq!(client.transport.base_url(), cc_core::MIN_API_BASE_URL);
  }

  #[test]
  fn test_client_creation_with_custom_base_url() {
    let config = Config::default_with_base_url("http://127.0.0.1:9000".to_string());

    let client = CryptoCompareClient::new(config).expect("Failed to create client");
    assert_eq!(client.transport.base_url(), "http://127.0.0.1:9000");
  }
}
