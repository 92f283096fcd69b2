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

//! OHLC history models shared by the histominute, histohour and histoday
//! resources.

use crate::common::ConversionType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Candle series response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
  /// `Success` or `Error`
  #[serde(rename = "Response")]
  pub response: String,

  /// Numeric response type code
  #[serde(rename = "Type")]
  pub response_type: i32,

  /// Whether candles were aggregated across periods
  #[serde(rename = "Aggregated", default)]
  pub aggregated: bool,

  /// The candles, oldest first
  #[serde(rename = "Data", default)]
  pub data: Vec<OhlcPoint>,

  /// Unix timestamp of the newest candle
  #[serde(rename = "TimeTo", default, skip_serializing_if = "Option::is_none")]
  pub time_to: Option<i64>,

  /// Unix timestamp of the oldest candle
  #[serde(rename = "TimeFrom", default, skip_serializing_if = "Option::is_none")]
  pub time_from: Option<i64>,

  /// Whether the first array entry is the oldest value
  #[serde(rename = "FirstValueInArray", default, skip_serializing_if = "Option::is_none")]
  pub first_value_in_array: Option<bool>,

  /// How prices were derived when the pair does not trade directly
  #[serde(rename = "ConversionType", default, skip_serializing_if = "Option::is_none")]
  pub conversion_type: Option<ConversionType>,
}

/// A single OHLC candle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcPoint {
  /// Unix timestamp of the period start
  pub time: i64,

  /// Opening price
  pub open: f64,

  /// Highest price in the period
  pub high: f64,

  /// Lowest price in the period
  pub low: f64,

  /// Closing price
  pub close: f64,

  /// Volume in the base currency
  #[serde(rename = "volumefrom")]
  pub volume_from: f64,

  /// Volume in the quote currency
  #[serde(rename = "volumeto")]
  pub volume_to: f64,
}

impl OhlcPoint {
  /// Period start as a UTC datetime, `None` for out-of-range timestamps
  pub fn datetime(&self) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(self.time, 0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_history_response_deserializes() {
    let json = r#"{
      "Response": "Success",
      "Type": 100,
      "Aggregated": false,
      "Data": [
        {
          "time": 1500854400,
          "close": 2763.42,
          "high": 2798.89,
          "low": 2715.69,
          "open": 2756.61,
          "volumefrom": 83009.25,
          "volumeto": 229047365.02
        },
        {
          "time": 1500940800,
          "close": 2582.58,
          "high": 2779.08,
          "low": 2472.62,
          "open": 2763.42,
          "volumefrom": 205883.15,
          "volumeto": 534765380.75
        }
      ],
      "TimeTo": 1503446400,
      "TimeFrom": 1500854400,
      "FirstValueInArray": true,
      "ConversionType": {"type": "direct", "conversionSymbol": ""}
    }"#;

    let history: HistoryResponse = serde_json::from_str(json).unwrap();

    assert_eq!(history.response, "Success");
    assert_eq!(history.data.len(), 2);
    assert_eq!(history.data[0].close, 2763.42);
    assert_eq!(history.data[1].volume_from, 205883.15);
    assert_eq!(history.time_to, Some(1503446400));
    assert_eq!(history.conversion_type.unwrap().kind, "direct");
  }

  #[test]
  fn test_ohlc_point_datetime() {
    let point = OhlcPoint {
      time: 1500854400,
      open: 2756.61,
      high: 2798.89,
      low: 2715.69,
      close: 2763.42,
      volume_from: 83009.25,
      volume_to: 229047365.02,
    };

    assert_eq!(point.datetime().unwrap().to_rfc3339(), "2017-07-24T00:00:00+00:00");
  }

  #[test]
  fn test_empty_data_defaults() {
    let json = r#"{"Response": "Success", "Type": 100, "Aggregated": false, "Data": []}"#;
    let history: HistoryResponse = serde_json::from_str(json).unwrap();

    assert!(history.data.is_empty());
    assert_eq!(history.time_to, None);
  }
}
