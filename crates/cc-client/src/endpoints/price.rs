//! Price endpoints: current, full, custom-average, daily-average and
//! historical prices.

use crate::transport::Transport;
use cc_core::{resolve_exchange, Endpoint, QueryParams, Result, Symbols};
use cc_models::price::{DayAvg, GenerateAvg, PriceFull, PriceMap};
use std::sync::Arc;
use tracing::instrument;

/// Optional parameters shared by the current-price lookups
#[derive(Debug, Default, Clone)]
pub struct PriceOptions {
  /// Exchange to get the price from; defaults to the CCCAGG aggregate
  pub exchange: Option<String>,

  /// Whether to convert through BTC when the pair does not trade directly;
  /// the API defaults to `true`
  pub try_conversion: Option<bool>,
}

impl PriceOptions {
  fn apply(&self, params: &mut QueryParams) {
    if let Some(exchange) = &self.exchange {
      params.insert("e", exchange.as_str());
    }
    if let Some(tc) = self.try_conversion {
      params.insert("tc", tc);
    }
  }
}

/// Optional parameters for [`PriceEndpoints::generate_avg`]
#[derive(Debug, Default, Clone)]
pub struct GenerateAvgOptions {
  /// Whether to convert through BTC when the pair does not trade directly
  pub try_conversion: Option<bool>,
}

/// Optional parameters for [`PriceEndpoints::day_avg`]
#[derive(Debug, Default, Clone)]
pub struct DayAvgOptions {
  /// Exchange to average on; defaults to the CCCAGG aggregate
  pub exchange: Option<String>,

  /// Whether to convert through BTC when the pair does not trade directly
  pub try_conversion: Option<bool>,

  /// Unix timestamp selecting the day to average
  pub to_ts: Option<i64>,

  /// Hour offset from UTC for the day boundary
  pub utc_offset: Option<i64>,
}

impl DayAvgOptions {
  fn apply(&self, params: &mut QueryParams) {
    if let Some(exchange) = &self.exchange {
      params.insert("e", exchange.as_str());
    }
    if let Some(tc) = self.try_conversion {
      params.insert("tc", tc);
    }
    if let Some(to_ts) = self.to_ts {
      params.insert("to_ts", to_ts);
    }
    if let Some(offset) = self.utc_offset {
      params.insert("utc_offset", offset);
    }
  }
}

/// Optional parameters for [`PriceEndpoints::historical`]
#[derive(Debug, Default, Clone)]
pub struct HistoricalPriceOptions {
  /// Unix timestamp to price at; the value comes from the daily close
  pub ts: Option<i64>,

  /// Exchange to get the price from; defaults to the CCCAGG aggregate
  pub exchange: Option<String>,

  /// Whether to convert through BTC when the pair does not trade directly
  pub try_conversion: Option<bool>,
}

impl HistoricalPriceOptions {
  fn apply(&self, params: &mut QueryParams) {
    if let Some(ts) = self.ts {
      params.insert("ts", ts);
    }
    if let Some(exchange) = &self.exchange {
      params.insert("e", exchange.as_str());
    }
    if let Some(tc) = self.try_conversion {
      params.insert("tc", tc);
    }
  }
}

/// Price endpoints
pub struct PriceEndpoints {
  transport: Arc<Transport>,
}

impl PriceEndpoints {
  /// Create a new price endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the current price(s) of one or more symbols in one or more
  /// currencies
  ///
  /// # Arguments
  ///
  /// * `from_syms` - Symbol(s) to price (e.g. "BTC", or `vec!["BTC", "ETH"]`)
  /// * `to_syms` - Currency symbol(s) to price in (e.g. "USD", `vec!["USD", "EUR"]`)
  /// * `opts` - Optional exchange and conversion settings
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cc_client::CryptoCompareClient;
  /// # use cc_client::endpoints::price::PriceOptions;
  /// # async fn example(client: CryptoCompareClient) -> cc_core::Result<()> {
  /// let prices = client.price().find("BTC", vec!["USD", "EUR"], &PriceOptions::default()).await?;
  /// println!("BTC/USD: {}", prices["BTC"]["USD"]);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip_all)]
  pub async fn find(
    &self,
    from_syms: impl Into<Symbols>,
    to_syms: impl Into<Symbols>,
    opts: &PriceOptions,
  ) -> Result<PriceMap> {
    let mut params = QueryParams::new();
    params.insert("from_syms", from_syms.into().join());
    params.insert("to_syms", to_syms.into().join());
    opts.apply(&mut params);

    self.transport.get(Endpoint::PriceMulti, params).await
  }

  /// Get full quotes, in raw and display variants, for one or more pairs
  ///
  /// # Arguments
  ///
  /// * `from_syms` - Symbol(s) to quote
  /// * `to_syms` - Currency symbol(s) to quote in
  /// * `opts` - Optional exchange and conversion settings
  #[instrument(skip_all)]
  pub async fn full(
    &self,
    from_syms: impl Into<Symbols>,
    to_syms: impl Into<Symbols>,
    opts: &PriceOptions,
  ) -> Result<PriceFull> {
    let mut params = QueryParams::new();
    params.insert("from_syms", from_syms.into().join());
    params.insert("to_syms", to_syms.into().join());
    opts.apply(&mut params);

    self.transport.get(Endpoint::PriceMultiFull, params).await
  }

  /// Get a custom aggregate quote across chosen markets
  ///
  /// Each market name is normalized to the casing the API enforces
  /// (`"coinbase"` works as well as `"Coinbase"`); unknown markets are sent
  /// as given.
  ///
  /// # Arguments
  ///
  /// * `from_sym` - Symbol to quote
  /// * `to_sym` - Currency symbol to quote in
  /// * `markets` - Exchange(s) to aggregate over
  /// * `opts` - Optional conversion settings
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cc_client::CryptoCompareClient;
  /// # use cc_client::endpoints::price::GenerateAvgOptions;
  /// # async fn example(client: CryptoCompareClient) -> cc_core::Result<()> {
  /// let avg = client
  ///   .price()
  ///   .generate_avg("BTC", "USD", vec!["coinbase", "poloniex"], &GenerateAvgOptions::default())
  ///   .await?;
  /// println!("Aggregate price: {}", avg.raw.price);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip_all)]
  pub async fn generate_avg(
    &self,
    from_sym: &str,
    to_sym: &str,
    markets: impl Into<Symbols>,
    opts: &GenerateAvgOptions,
  ) -> Result<GenerateAvg> {
    let markets = match markets.into() {
      Symbols::One(market) => resolve_exchange(&market),
      Symbols::Many(markets) => {
        markets.iter().map(|m| resolve_exchange(m)).collect::<Vec<_>>().join(",")
      }
    };

    let mut params = QueryParams::new();
    params.insert("from_sym", from_sym);
    params.insert("to_sym", to_sym);
    params.insert("e", markets);
    if let Some(tc) = opts.try_conversion {
      params.insert("tc", tc);
    }

    self.transport.get(Endpoint::GenerateAvg, params).await
  }

  /// Get the daily average price of a pair
  ///
  /// The average is based on 00:00 GMT day boundaries unless `utc_offset`
  /// shifts them.
  ///
  /// # Arguments
  ///
  /// * `from_sym` - Symbol to price
  /// * `to_sym` - Currency symbol to price in
  /// * `opts` - Optional exchange, conversion, day and offset settings
  #[instrument(skip_all)]
  pub async fn day_avg(
    &self,
    from_sym: &str,
    to_sym: &str,
    opts: &DayAvgOptions,
  ) -> Result<DayAvg> {
    let mut params = QueryParams::new();
    params.insert("from_sym", from_sym);
    params.insert("to_sym", to_sym);
    opts.apply(&mut params);

    self.transport.get(Endpoint::DayAvg, params).await
  }

  /// Get the price of a symbol at a past timestamp
  ///
  /// The price comes from the daily close at the requested timestamp. If the
  /// pair did not trade directly, BTC is used for conversion unless disabled.
  ///
  /// # Arguments
  ///
  /// * `from_sym` - Symbol to price
  /// * `to_syms` - Currency symbol(s) to price in
  /// * `opts` - Optional timestamp, exchange and conversion settings
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cc_client::CryptoCompareClient;
  /// # use cc_client::endpoints::price::HistoricalPriceOptions;
  /// # async fn example(client: CryptoCompareClient) -> cc_core::Result<()> {
  /// let opts = HistoricalPriceOptions { ts: Some(1452680400), ..Default::default() };
  /// let prices = client.price().historical("ETH", vec!["BTC", "USD", "EUR"], &opts).await?;
  /// println!("ETH/USD was {}", prices["ETH"]["USD"]);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip_all)]
  pub async fn historical(
    &self,
    from_sym: &str,
    to_syms: impl Into<Symbols>,
    opts: &HistoricalPriceOptions,
  ) -> Result<PriceMap> {
    let mut params = QueryParams::new();
    params.insert("from_sym", from_sym);
    params.insert("to_syms", to_syms.into().join());
    opts.apply(&mut params);

    self.transport.get(Endpoint::PriceHistorical, params).await
  }
}
