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

//! Coin metadata models: the full coin directory and per-pair snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Response of the `all/coinlist` resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinList {
  /// `Success` or `Error`
  #[serde(rename = "Response")]
  pub response: String,

  /// Human-readable status message
  #[serde(rename = "Message", default)]
  pub message: String,

  /// Base URL to join with each coin's `ImageUrl`
  #[serde(rename = "BaseImageUrl", default, skip_serializing_if = "Option::is_none")]
  pub base_image_url: Option<String>,

  /// Base URL to join with each coin's `Url`
  #[serde(rename = "BaseLinkUrl", default, skip_serializing_if = "Option::is_none")]
  pub base_link_url: Option<String>,

  /// Sponsored default watchlist, shape not guaranteed
  #[serde(rename = "DefaultWatchlist", default, skip_serializing_if = "Option::is_none")]
  pub default_watchlist: Option<Value>,

  /// Coin symbol -> coin metadata
  #[serde(rename = "Data", default)]
  pub data: BTreeMap<String, CoinInfo>,

  /// Numeric response type code
  #[serde(rename = "Type")]
  pub response_type: i32,
}

/// Metadata for one coin in the directory.
///
/// Numeric-looking fields (`Id`, `TotalCoinSupply`, `SortOrder`) arrive as
/// strings and frequently hold `N/A`, so they stay strings here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinInfo {
  /// Internal coin id
  #[serde(rename = "Id")]
  pub id: String,

  /// Overview page path, relative to `BaseLinkUrl`
  #[serde(rename = "Url", default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,

  /// Logo path, relative to `BaseImageUrl`; not every coin has one
  #[serde(rename = "ImageUrl", default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,

  /// Short name, usually the symbol
  #[serde(rename = "Name")]
  pub name: String,

  /// Ticker symbol
  #[serde(rename = "Symbol")]
  pub symbol: String,

  /// Full coin name
  #[serde(rename = "CoinName")]
  pub coin_name: String,

  /// Coin name with the symbol appended
  #[serde(rename = "FullName", default)]
  pub full_name: String,

  /// Hashing algorithm
  #[serde(rename = "Algorithm", default)]
  pub algorithm: String,

  /// Proof type, e.g. `PoW`
  #[serde(rename = "ProofType", default)]
  pub proof_type: String,

  /// `1` when the whole supply was premined
  #[serde(rename = "FullyPremined", default)]
  pub fully_premined: String,

  /// Total supply as reported, may be `N/A`
  #[serde(rename = "TotalCoinSupply", default)]
  pub total_coin_supply: String,

  /// Premined value as reported, may be `N/A`
  #[serde(rename = "PreMinedValue", default)]
  pub pre_mined_value: String,

  /// Free float as reported, may be `N/A`
  #[serde(rename = "TotalCoinsFreeFloat", default)]
  pub total_coins_free_float: String,

  /// Directory sort position
  #[serde(rename = "SortOrder", default)]
  pub sort_order: String,

  /// Whether the listing is sponsored
  #[serde(rename = "Sponsored", default)]
  pub sponsored: bool,
}

/// Response of the `top/exchanges/full` resource for one pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSnapshot {
  /// `Success` or `Error`
  #[serde(rename = "Response")]
  pub response: String,

  /// Human-readable status message
  #[serde(rename = "Message", default)]
  pub message: String,

  /// Numeric response type code
  #[serde(rename = "Type")]
  pub response_type: i32,

  /// Snapshot payload
  #[serde(rename = "Data")]
  pub data: CoinSnapshotData,
}

/// Block-explorer info plus aggregated and per-exchange quotes for a pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSnapshotData {
  /// Hashing algorithm of the base coin
  #[serde(rename = "Algorithm", default)]
  pub algorithm: String,

  /// Proof type of the base coin
  #[serde(rename = "ProofType", default)]
  pub proof_type: String,

  /// Current block height
  #[serde(rename = "BlockNumber", default, skip_serializing_if = "Option::is_none")]
  pub block_number: Option<i64>,

  /// Network hash rate
  #[serde(rename = "NetHashesPerSecond", default, skip_serializing_if = "Option::is_none")]
  pub net_hashes_per_second: Option<f64>,

  /// Coins mined so far
  #[serde(rename = "TotalCoinsMined", default, skip_serializing_if = "Option::is_none")]
  pub total_coins_mined: Option<f64>,

  /// Current block reward
  #[serde(rename = "BlockReward", default, skip_serializing_if = "Option::is_none")]
  pub block_reward: Option<f64>,

  /// Aggregate quote across all listed exchanges
  #[serde(rename = "AggregatedData")]
  pub aggregated_data: SnapshotQuote,

  /// Individual quote per exchange
  #[serde(rename = "Exchanges", default)]
  pub exchanges: Vec<SnapshotQuote>,
}

/// A quote inside a coin snapshot. This resource renders every numeric field
/// as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotQuote {
  /// Internal record type
  #[serde(rename = "TYPE", default)]
  pub record_type: String,

  /// Market name, `CCCAGG` for the aggregate
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
  pub flags: String,

  /// Current price
  #[serde(rename = "PRICE")]
  pub price: String,

  /// Unix timestamp of the last update, as a string
  #[serde(rename = "LASTUPDATE", default)]
  pub last_update: String,

  /// Size of the last trade in the base currency
  #[serde(rename = "LASTVOLUME", default)]
  pub last_volume: String,

  /// Size of the last trade in the quote currency
  #[serde(rename = "LASTVOLUMETO", default)]
  pub last_volume_to: String,

  /// Identifier of the last trade
  #[serde(rename = "LASTTRADEID", default)]
  pub last_trade_id: String,

  /// 24h volume in the base currency
  #[serde(rename = "VOLUME24HOUR", default)]
  pub volume_24_hour: String,

  /// 24h volume in the quote currency
  #[serde(rename = "VOLUME24HOURTO", default)]
  pub volume_24_hour_to: String,

  /// Price 24h ago
  #[serde(rename = "OPEN24HOUR", default)]
  pub open_24_hour: String,

  /// 24h high
  #[serde(rename = "HIGH24HOUR", default)]
  pub high_24_hour: String,

  /// 24h low
  #[serde(rename = "LOW24HOUR", default)]
  pub low_24_hour: String,

  /// Market of the last trade, aggregate quotes only
  #[serde(rename = "LASTMARKET", default, skip_serializing_if = "Option::is_none")]
  pub last_market: Option<String>,
}

impl SnapshotQuote {
  /// Parse the price string as f64
  pub fn price_as_f64(&self) -> Result<f64, std::num::ParseFloatError> {
    self.price.parse()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_coin_list_deserializes() {
    let json = r#"{
      "Response": "Success",
      "Message": "Coin list succesfully returned!",
      "BaseImageUrl": "https://www.cryptocompare.com",
      "BaseLinkUrl": "https://www.cryptocompare.com",
      "Data": {
        "BTC": {
          "Id": "1182",
          "Url": "/coins/btc/overview",
          "ImageUrl": "/media/19633/btc.png",
          "Name": "BTC",
          "Symbol": "BTC",
          "CoinName": "Bitcoin",
          "FullName": "Bitcoin (BTC)",
          "Algorithm": "SHA256",
          "ProofType": "PoW",
          "FullyPremined": "0",
          "TotalCoinSupply": "21000000",
          "PreMinedValue": "N/A",
          "TotalCoinsFreeFloat": "N/A",
          "SortOrder": "1",
          "Sponsored": false
        }
      },
      "Type": 100
    }"#;

    let list: CoinList = serde_json::from_str(json).unwrap();

    assert_eq!(list.response, "Success");
    let btc = &list.data["BTC"];
    assert_eq!(btc.coin_name, "Bitcoin");
    assert_eq!(btc.algorithm, "SHA256");
    assert_eq!(btc.total_coin_supply, "21000000");
  }

  #[test]
  fn test_coin_snapshot_deserializes() {
    let json = r#"{
      "Response": "Success",
      "Message": "Coin snapshot succesfully returned",
      "Type": 100,
      "Data": {
        "Algorithm": "SHA256",
        "ProofType": "PoW",
        "BlockNumber": 378345,
        "NetHashesPerSecond": 465548431.66333866,
        "TotalCoinsMined": 14707625.0,
        "BlockReward": 25.0,
        "AggregatedData": {
          "TYPE": "5",
          "MARKET": "CCCAGG",
          "FROMSYMBOL": "BTC",
          "TOSYMBOL": "USD",
          "FLAGS": "4",
          "PRICE": "245.41",
          "LASTUPDATE": "1444520460",
          "LASTVOLUME": "0.0086",
          "LASTVOLUMETO": "2.110268",
          "LASTTRADEID": "1444520460357",
          "VOLUME24HOUR": "49591.48108707269",
          "VOLUME24HOURTO": "12139110.189163648",
          "OPEN24HOUR": "244.41",
          "HIGH24HOUR": "258.37",
          "LOW24HOUR": "239.01000004",
          "LASTMARKET": "Huobi"
        },
        "Exchanges": [
          {
            "TYPE": "2",
            "MARKET": "LakeBTC",
            "FROMSYMBOL": "BTC",
            "TOSYMBOL": "USD",
            "FLAGS": "2",
            "PRICE": "244.37",
            "LASTUPDATE": "1444513131",
            "LASTVOLUME": "0.03",
            "LASTVOLUMETO": "7.3311",
            "LASTTRADEID": "1444513131",
            "VOLUME24HOUR": "3599.0560000000005",
            "VOLUME24HOURTO": "879237.6299349999",
            "OPEN24HOUR": "243.83",
            "HIGH24HOUR": "245.23",
            "LOW24HOUR": "242.68"
          }
        ]
      }
    }"#;

    let snapshot: CoinSnapshot = serde_json::from_str(json).unwrap();

    assert_eq!(snapshot.data.block_number, Some(378345));
    assert_eq!(snapshot.data.aggregated_data.last_market.as_deref(), Some("Huobi"));
    assert_eq!(snapshot.data.exchanges.len(), 1);
    assert_eq!(snapshot.data.exchanges[0].market, "LakeBTC");
    assert_eq!(snapshot.data.exchanges[0].price_as_f64().unwrap(), 244.37);
  }
}
