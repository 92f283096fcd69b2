/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

//! Common types shared across min-API responses

use serde::{Deserialize, Serialize};

/// How the API derived a price when the pair does not trade directly.
///
/// `type` is `direct` for a directly-traded pair, `force_direct` when an
/// exchange was forced, or a conversion kind with `conversionSymbol` set to
/// the intermediate coin (usually BTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionType {
  /// Conversion kind
  #[serde(rename = "type")]
  pub kind: String,

  /// Intermediate symbol used for the conversion, empty when direct
  #[serde(rename = "conversionSymbol")]
  pub conversion_symbol: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_conversion_type_deserializes() {
    let json = r#"{"type": "direct", "conversionSymbol": ""}"#;
    let parsed: ConversionType = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.kind, "direct");
    assert_eq!(parsed.conversion_symbol, "");
  }
}
