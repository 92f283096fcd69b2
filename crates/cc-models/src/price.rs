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

//! Price response models: pricemulti, pricemultifull, generateAvg, dayAvg
//! and pricehistorical.

use crate::common::ConversionType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Nested symbol -> symbol -> price map returned by `pricemulti` and
/// `pricehistorical`, e.g. `{"BTC": {"USD": 2561.88, "EUR": 2204.92}}`.
pub type PriceMap = BTreeMap<String, BTreeMap<String, f64>>;

/// Full price response with raw and display variants of every quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFull {
  /// Machine-readable quotes, from symbol -> to symbol -> quote
  #[serde(rename = "RAW")]
  pub raw: BTreeMap<String, BTreeMap<String, RawQuote>>,

  /// Human-readable quotes with currency signs and thousands separators
  #[serde(rename = "DISPLAY")]
  pub display: BTreeMap<String, BTreeMap<String, DisplayQuote>>,
}

/// Custom aggregate response from `generateAvg`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateAvg {
  /// Machine-readable aggregate quote
  #[serde(rename = "RAW")]
  pub raw: RawQuote,

  /// Human-readable aggregate quote
  #[serde(rename = "DISPLAY")]
  pub display: DisplayQuote,
}

/// Daily average price response from `dayAvg`.
///
/// The priced currencies arrive as top-level keys next to `ConversionType`,
/// e.g. `{"USD": 4576.46, "ConversionType": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvg {
  /// How the average was derived
  #[serde(rename = "ConversionType")]
  pub conversion_type: ConversionType,

  /// Currency symbol -> averaged price
  #[serde(flatten)]
  pub prices: BTreeMap<String, f64>,
}

/// Machine-readable quote.
///
/// Shared between `pricemultifull` and `generateAvg`; fields present on only
/// one of the two paths are optional. `FLAGS` and `LASTTRADEID` arrive as a
/// string on some paths and a number on others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
  /// Internal record type
  #[serde(rename = "TYPE", default, skip_serializing_if = "Option::is_none")]
  pub record_type: Option<String>,

  /// Market the quote comes from, `CCCAGG` for the aggregate index
  #[serde(rename = "MARKET")]
  pub market: String,

  /// Base symbol
  #[serde(rename = "FROMSYMBOL")]
  pub from_symbol: String,

  /// Quote symbol
  #[serde(rename = "TOSYMBOL")]
  pub to_symbol: String,

  /// Internal flags
  #[serde(rename = "FLAGS", default)]
  pub flags: Option<Value>,

  /// Current price in the quote currency
  #[serde(rename = "PRICE")]
  pub price: f64,

  /// Unix timestamp of the last update
  #[serde(rename = "LASTUPDATE")]
  pub last_update: i64,

  /// Size of the last trade in the base currency
  #[serde(rename = "LASTVOLUME")]
  pub last_volume: f64,

  /// Size of the last trade in the quote currency
  #[serde(rename = "LASTVOLUMETO")]
  pub last_volume_to: f64,

  /// Identifier of the last trade
  #[serde(rename = "LASTTRADEID", default)]
  pub last_trade_id: Option<Value>,

  /// 24h volume in the base currency
  #[serde(rename = "VOLUME24HOUR")]
  pub volume_24_hour: f64,

  /// 24h volume in the quote currency
  #[serde(rename = "VOLUME24HOURTO")]
  pub volume_24_hour_to: f64,

  /// Price 24h ago
  #[serde(rename = "OPEN24HOUR")]
  pub open_24_hour: f64,

  /// 24h high
  #[serde(rename = "HIGH24HOUR")]
  pub high_24_hour: f64,

  /// 24h low
  #[serde(rename = "LOW24HOUR")]
  pub low_24_hour: f64,

  /// Market of the last trade
  #[serde(rename = "LASTMARKET", default, skip_serializing_if = "Option::is_none")]
  pub last_market: Option<String>,

  /// Absolute 24h price change
  #[serde(rename = "CHANGE24HOUR", default, skip_serializing_if = "Option::is_none")]
  pub change_24_hour: Option<f64>,

  /// Relative 24h price change in percent
  #[serde(rename = "CHANGEPCT24HOUR", default, skip_serializing_if = "Option::is_none")]
  pub change_pct_24_hour: Option<f64>,

  /// Absolute price change since the daily open (generateAvg only)
  #[serde(rename = "CHANGEDAY", default, skip_serializing_if = "Option::is_none")]
  pub change_day: Option<f64>,

  /// Relative price change since the daily open (generateAvg only)
  #[serde(rename = "CHANGEPCTDAY", default, skip_serializing_if = "Option::is_none")]
  pub change_pct_day: Option<f64>,

  /// Circulating supply of the base coin (pricemultifull only)
  #[serde(rename = "SUPPLY", default, skip_serializing_if = "Option::is_none")]
  pub supply: Option<f64>,

  /// Market capitalization in the quote currency (pricemultifull only)
  #[serde(rename = "MKTCAP", default, skip_serializing_if = "Option::is_none")]
  pub market_cap: Option<f64>,
}

/// Human-readable quote with currency signs and formatted numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayQuote {
  /// Base symbol rendered with its currency sign
  #[serde(rename = "FROMSYMBOL")]
  pub from_symbol: String,

  /// Quote symbol rendered with its currency sign
  #[serde(rename = "TOSYMBOL")]
  pub to_symbol: String,

  /// Market name
  #[serde(rename = "MARKET")]
  pub market: String,

  /// Formatted price
  #[serde(rename = "PRICE")]
  pub price: String,

  /// Human-friendly last-update description
  #[serde(rename = "LASTUPDATE", default, skip_serializing_if = "Option::is_none")]
  pub last_update: Option<String>,

  /// Formatted size of the last trade in the base currency
  #[serde(rename = "LASTVOLUME", default, skip_serializing_if = "Option::is_none")]
  pub last_volume: Option<String>,

  /// Formatted size of the last trade in the quote currency
  #[serde(rename = "LASTVOLUMETO", default, skip_serializing_if = "Option::is_none")]
  pub last_volume_to: Option<String>,

  /// Identifier of the last trade
  #[serde(rename = "LASTTRADEID", default)]
  pub last_trade_id: Option<Value>,

  /// Formatted 24h volume in the base currency
  #[serde(rename = "VOLUME24HOUR", default, skip_serializing_if = "Option::is_none")]
  pub volume_24_hour: Option<String>,

  /// Formatted 24h volume in the quote currency
  #[serde(rename = "VOLUME24HOURTO", default, skip_serializing_if = "Option::is_none")]
  pub volume_24_hour_to: Option<String>,

  /// Formatted price 24h ago
  #[serde(rename = "OPEN24HOUR", default, skip_serializing_if = "Option::is_none")]
  pub open_24_hour: Option<String>,

  /// Formatted 24h high
  #[serde(rename = "HIGH24HOUR", default, skip_serializing_if = "Option::is_none")]
  pub high_24_hour: Option<String>,

  /// Formatted 24h low
  #[serde(rename = "LOW24HOUR", default, skip_serializing_if = "Option::is_none")]
  pub low_24_hour: Option<String>,

  /// Market of the last trade
  #[serde(rename = "LASTMARKET", default, skip_serializing_if = "Option::is_none")]
  pub last_market: Option<String>,

  /// Formatted absolute 24h change
  #[serde(rename = "CHANGE24HOUR", default, skip_serializing_if = "Option::is_none")]
  pub change_24_hour: Option<String>,

  /// Formatted relative 24h change
  #[serde(rename = "CHANGEPCT24HOUR", default, skip_serializing_if = "Option::is_none")]
  pub change_pct_24_hour: Option<String>,

  /// Formatted change since the daily open (generateAvg only)
  #[serde(rename = "CHANGEDAY", default, skip_serializing_if = "Option::is_none")]
  pub change_day: Option<String>,

  /// Formatted relative change since the daily open (generateAvg only)
  #[serde(rename = "CHANGEPCTDAY", default, skip_serializing_if = "Option::is_none")]
  pub change_pct_day: Option<String>,

  /// Formatted circulating supply (pricemultifull only)
  #[serde(rename = "SUPPLY", default, skip_serializing_if = "Option::is_none")]
  pub supply: Option<String>,

  /// Formatted market capitalization (pricemultifull only)
  #[serde(rename = "MKTCAP", default, skip_serializing_if = "Option::is_none")]
  pub market_cap: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_price_map_deserializes() {
    let json = r#"{"BTC": {"USD": 2513.55, "EUR": 2204.92}, "ETH": {"USD": 236.99}}"#;
    let prices: PriceMap = serde_json::from_str(json).unwrap();

    assert_eq!(prices["BTC"]["USD"], 2513.55);
    assert_eq!(prices["BTC"]["EUR"], 2204.92);
    assert_eq!(prices["ETH"]["USD"], 236.99);
  }

  #[test]
  fn test_price_full_deserializes() {
    let json = r#"{
      "RAW": {
        "BTC": {
          "USD": {
            "TYPE": "5",
            "MARKET": "CCCAGG",
            "FROMSYMBOL": "BTC",
            "TOSYMBOL": "USD",
            "FLAGS": "4",
            "PRICE": 4551.84,
            "LASTUPDATE": 1504753702,
            "LASTVOLUME": 0.00000219,
            "LASTVOLUMETO": 0.00995355,
            "LASTTRADEID": 20466080,
            "VOLUME24HOUR": 110449.85666195827,
            "VOLUME24HOURTO": 503369392.8440719,
            "OPEN24HOUR": 4497.45,
            "HIGH24HOUR": 4667.51,
            "LOW24HOUR": 4386.51,
            "LASTMARKET": "Coinbase",
            "CHANGE24HOUR": 54.39,
            "CHANGEPCT24HOUR": 1.2093519661141388,
            "SUPPLY": 16549137,
            "MKTCAP": 75329023762.08
          }
        }
      },
      "DISPLAY": {
        "BTC": {
          "USD": {
            "FROMSYMBOL": "Ƀ",
            "TOSYMBOL": "$",
            "MARKET": "CryptoCompare Index",
            "PRICE": "$ 4,551.84",
            "LASTUPDATE": "Just now",
            "LASTMARKET": "Coinbase"
          }
        }
      }
    }"#;

    let full: PriceFull = serde_json::from_str(json).unwrap();

    let raw = &full.raw["BTC"]["USD"];
    assert_eq!(raw.market, "CCCAGG");
    assert_eq!(raw.price, 4551.84);
    assert_eq!(raw.supply, Some(16549137.0));

    let display = &full.display["BTC"]["USD"];
    assert_eq!(display.from_symbol, "Ƀ");
    assert_eq!(display.price, "$ 4,551.84");
  }

  #[test]
  fn test_generate_avg_deserializes_without_full_only_fields() {
    let json = r#"{
      "RAW": {
        "MARKET": "CUSTOMAGG",
        "FROMSYMBOL": "BTC",
        "TOSYMBOL": "USD",
        "FLAGS": 0,
        "PRICE": 6515.83,
        "LASTUPDATE": 1510593868,
        "LASTVOLUME": 0.32048943,
        "LASTVOLUMETO": 2088.2546426769,
        "LASTTRADEID": "24036877",
        "VOLUME24HOUR": 36885.10268221979,
        "VOLUME24HOURTO": 229156918.68158323,
        "OPEN24HOUR": 6085.22,
        "HIGH24HOUR": 6841.45,
        "LOW24HOUR": 5652.8,
        "LASTMARKET": "Coinbase",
        "CHANGE24HOUR": 430.61,
        "CHANGEPCT24HOUR": 7.076325917551045,
        "CHANGEDAY": 0,
        "CHANGEPCTDAY": 0
      },
      "DISPLAY": {
        "FROMSYMBOL": "Ƀ",
        "TOSYMBOL": "$",
        "MARKET": "CUSTOMAGG",
        "PRICE": "$ 6,515.83",
        "LASTTRADEID": "24036877",
        "CHANGEDAY": "$ 0"
      }
    }"#;

    let avg: GenerateAvg = serde_json::from_str(json).unwrap();

    assert_eq!(avg.raw.market, "CUSTOMAGG");
    assert_eq!(avg.raw.record_type, None);
    assert_eq!(avg.raw.change_day, Some(0.0));
    assert_eq!(avg.raw.supply, None);
    assert_eq!(avg.display.price, "$ 6,515.83");
  }

  #[test]
  fn test_day_avg_splits_prices_from_conversion_type() {
    let json = r#"{"USD": 4576.46, "ConversionType": {"type": "direct", "conversionSymbol": ""}}"#;
    let avg: DayAvg = serde_json::from_str(json).unwrap();

    assert_eq!(avg.prices["USD"], 4576.46);
    assert_eq!(avg.conversion_type.kind, "direct");
  }
}
