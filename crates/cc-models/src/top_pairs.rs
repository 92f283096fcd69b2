//! Top trading pairs models

use serde::{Deserialize, Serialize};

/// Response of the `top/pairs` resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPairsResponse {
  /// `Success` or `Error`
  #[serde(rename = "Response")]
  pub response: String,

  /// Pairs ordered by volume, highest first
  #[serde(rename = "Data", default)]
  pub data: Vec<TopPair>,
}

/// One pair in the volume ranking. Always aggregated data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPair {
  /// Market the ranking comes from, `CCCAGG`
  pub exchange: String,

  /// Base symbol
  #[serde(rename = "fromSymbol")]
  pub from_symbol: String,

  /// Quote symbol
  #[serde(rename = "toSymbol")]
  pub to_symbol: String,

  /// 24h volume in the base currency
  #[serde(rename = "volume24h")]
  pub volume_24h: f64,

  /// 24h volume in the quote currency
  #[serde(rename = "volume24hTo")]
  pub volume_24h_to: f64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_top_pairs_deserializes() {
    let json = r#"{
      "Response": "Success",
      "Data": [
        {
          "exchange": "CCCAGG",
          "fromSymbol": "ETH",
          "toSymbol": "USD",
          "volume24h": 1310705.3005027298,
          "volume24hTo": 288031723.3503975
        },
        {
          "exchange": "CCCAGG",
          "fromSymbol": "ETH",
          "toSymbol": "BTC",
          "volume24h": 978200.2198323006,
          "volume24hTo": 77883.06190085363
        }
      ]
    }"#;

    let pairs: TopPairsResponse = serde_json::from_str(json).unwrap();

    assert_eq!(pairs.response, "Success");
    assert_eq!(pairs.data.len(), 2);
    assert_eq!(pairs.data[0].from_symbol, "ETH");
    assert_eq!(pairs.data[1].to_symbol, "BTC");
  }
}
