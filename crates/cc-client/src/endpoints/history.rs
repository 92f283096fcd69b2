//! OHLC candle history endpoints: histominute, histohour and histoday.

use crate::transport::Transport;
use cc_core::{Endpoint, QueryParams, Result};
use cc_models::history::HistoryResponse;
use std::sync::Arc;
use tracing::instrument;

/// Optional parameters shared by the candle history resources
#[derive(Debug, Default, Clone)]
pub struct HistoryOptions {
  /// Exchange to read candles from; defaults to the CCCAGG aggregate
  pub exchange: Option<String>,

  /// Number of candles to return; the API returns `limit + 1` data points.
  /// Defaults upstream: 1440 for minutes, 168 for hours, 30 for days
  pub limit: Option<u32>,

  /// Number of periods to aggregate into one candle; the API default is 1
  pub aggregate: Option<u32>,

  /// Unix timestamp of the newest candle to return
  pub to_ts: Option<i64>,

  /// Whether to convert through BTC when the pair does not trade directly;
  /// the API defaults to `true`
  pub try_conversion: Option<bool>,

  /// Return every stored candle instead of `limit`; daily candles only
  pub all_data: Option<bool>,
}

impl HistoryOptions {
  fn apply(&self, params: &mut QueryParams) {
    if let Some(exchange) = &self.exchange {
      params.insert("e", exchange.as_str());
    }
    if let Some(limit) = self.limit {
      params.insert("limit", limit);
    }
    if let Some(aggregate) = self.aggregate {
      params.insert("agg", aggregate);
    }
    if let Some(to_ts) = self.to_ts {
      params.insert("to_ts", to_ts);
    }
    if let Some(tc) = self.try_conversion {
      params.insert("tc", tc);
    }
    if let Some(all_data) = self.all_data {
      params.insert("all_data", all_data);
    }
  }
}

/// OHLC candle history endpoints
pub struct HistoryEndpoints {
  transport: Arc<Transport>,
}

impl HistoryEndpoints {
  /// Create a new history endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get per-minute candles for a pair
  ///
  /// Minute data is only stored upstream for 7 days; use [`Self::hour`] or
  /// [`Self::day`] for anything older.
  ///
  /// # Arguments
  ///
  /// * `from_sym` - Base symbol (e.g. "BTC")
  /// * `to_sym` - Quote symbol (e.g. "USD")
  /// * `opts` - Optional exchange, limit, aggregation and range settings
  #[instrument(skip(self, opts), fields(from_sym, to_sym))]
  pub async fn minute(
    &self,
    from_sym: &str,
    to_sym: &str,
    opts: &HistoryOptions,
  ) -> Result<HistoryResponse> {
    self.fetch(Endpoint::HistoMinute, from_sym, to_sym, opts).await
  }

  /// Get hourly candles for a pair
  ///
  /// # Arguments
  ///
  /// * `from_sym` - Base symbol (e.g. "BTC")
  /// * `to_sym` - Quote symbol (e.g. "USD")
  /// * `opts` - Optional exchange, limit, aggregation and range settings
  #[instrument(skip(self, opts), fields(from_sym, to_sym))]
  pub async fn hour(
    &self,
    from_sym: &str,
    to_sym: &str,
    opts: &HistoryOptions,
  ) -> Result<HistoryResponse> {
    self.fetch(Endpoint::HistoHour, from_sym, to_sym, opts).await
  }

  /// Get daily candles for a pair
  ///
  /// Values are based on 00:00 GMT. Set `all_data` in `opts` to fetch the
  /// whole stored series.
  ///
  /// # Arguments
  ///
  /// * `from_sym` - Base symbol (e.g. "BTC")
  /// * `to_sym` - Quote symbol (e.g. "USD")
  /// * `opts` - Optional exchange, limit, aggregation and range settings
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cc_client::CryptoCompareClient;
  /// # use cc_client::endpoints::history::HistoryOptions;
  /// # async fn example(client: CryptoCompareClient) -> cc_core::Result<()> {
  /// let opts = HistoryOptions { limit: Some(10), ..Default::default() };
  /// let candles = client.history().day("BTC", "USD", &opts).await?;
  /// for point in &candles.data {
  ///     println!("{}: close {}", point.time, point.close);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, opts), fields(from_sym, to_sym))]
  pub async fn day(
    &self,
    from_sym: &str,
    to_sym: &str,
    opts: &HistoryOptions,
  ) -> Result<HistoryResponse> {
    self.fetch(Endpoint::HistoDay, from_sym, to_sym, opts).await
  }

  async fn fetch(
    &self,
    endpoint: Endpoint,
    from_sym: &str,
    to_sym: &str,
    opts: &HistoryOptions,
  ) -> Result<HistoryResponse> {
    let mut params = QueryParams::new();
    params.insert("from_sym", from_sym);
    params.insert("to_sym", to_sym);
    opts.apply(&mut params);

    self.transport.get(endpoint, params).await
  }
}
