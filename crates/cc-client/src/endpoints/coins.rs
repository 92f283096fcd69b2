//! Coin metadata endpoints

use crate::transport::Transport;
use cc_core::{Endpoint, QueryParams, Result};
use cc_models::coins::{CoinList, CoinSnapshot};
use std::sync::Arc;
use tracing::instrument;

/// Coin metadata endpoints
pub struct CoinEndpoints {
  transport: Arc<Transport>,
}

impl CoinEndpoints {
  /// Create a new coin endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get general info for every coin the API knows about
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cc_client::CryptoCompareClient;
  /// # async fn example(client: CryptoCompareClient) -> cc_core::Result<()> {
  /// let coins = client.coins().list().await?;
  /// if let Some(btc) = coins.data.get("BTC") {
  ///     println!("{}: {} ({})", btc.symbol, btc.coin_name, btc.algorithm);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<CoinList> {
    self.transport.get(Endpoint::CoinList, QueryParams::new()).await
  }

  /// Get block-explorer info, the aggregate quote and per-exchange quotes
  /// for a pair
  ///
  /// # Arguments
  ///
  /// * `from_sym` - Base symbol (e.g. "BTC")
  /// * `to_sym` - Quote symbol (e.g. "USD")
  #[instrument(skip(self), fields(from_sym, to_sym))]
  pub async fn snapshot(&self, from_sym: &str, to_sym: &str) -> Result<CoinSnapshot> {
    let mut params = QueryParams::new();
    params.insert("from_sym", from_sym);
    params.insert("to_sym", to_sym);

    self.transport.get(Endpoint::CoinSnapshot, params).await
  }
}
