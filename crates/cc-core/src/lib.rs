pub mod config;
pub mod error;
pub mod exchanges;
pub mod params;

pub use config::Config;
pub use error::{Error, Result};
pub use exchanges::resolve_exchange;
pub use params::{build_url, ParamValue, QueryParams, Symbols};

/// The currently supported min-API resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Price resources
  PriceMulti,
  PriceMultiFull,
  GenerateAvg,
  DayAvg,
  PriceHistorical,

  // OHLC history resources
  HistoDay,
  HistoHour,
  HistoMinute,

  // Coin and exchange metadata
  CoinList,
  CoinSnapshot,
  TopPairs,
  ExchangeList,

  // News
  News,
  NewsProviders,

  // Usage stats
  RateLimit,
}

// Implement Display trait for Endpoint
impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      // Price resources
      Endpoint::PriceMulti => write!(f, "data/pricemulti"),
      Endpoint::PriceMultiFull => write!(f, "data/pricemultifull"),
      Endpoint::GenerateAvg => write!(f, "data/generateAvg"),
      Endpoint::DayAvg => write!(f, "data/dayAvg"),
      Endpoint::PriceHistorical => write!(f, "data/pricehistorical"),

      // OHLC history resources
      Endpoint::HistoDay => write!(f, "data/histoday"),
      Endpoint::HistoHour => write!(f, "data/histohour"),
      Endpoint::HistoMinute => write!(f, "data/histominute"),

      // Coin and exchange metadata
      Endpoint::CoinList => write!(f, "data/all/coinlist"),
      Endpoint::CoinSnapshot => write!(f, "data/top/exchanges/full"),
      Endpoint::TopPairs => write!(f, "data/top/pairs"),
      Endpoint::ExchangeList => write!(f, "data/all/exchanges"),

      // News. The articles feed path carries a trailing slash upstream.
      Endpoint::News => write!(f, "data/news/"),
      Endpoint::NewsProviders => write!(f, "data/news/providers"),

      // Usage stats
      Endpoint::RateLimit => write!(f, "stats/rate/limit"),
    }
  }
}

/// Base URL for the CryptoCompare min-API
pub const MIN_API_BASE_URL: &str = "https://min-api.cryptocompare.com";
