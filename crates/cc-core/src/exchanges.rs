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

//! Exchange-name normalization.
//!
//! The min-API matches exchange names case-sensitively (`Coinbase` works,
//! `coinbase` does not). The bundled table maps uppercased identifiers to the
//! casing the API expects.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// UPPERCASED exchange identifier -> canonical casing.
///
/// Parsed once from the bundled table on first use; read-only afterward.
static EXCHANGE_NAMES: Lazy<HashMap<String, String>> = Lazy::new(|| {
  serde_json::from_str(include_str!("../config/exchanges.json"))
    .expect("bundled exchanges.json must parse")
});

/// Normalizes a user-supplied exchange name to the API's canonical casing.
///
/// Unknown names are returned unchanged; the API is the final arbiter, and
/// exchanges added upstream should keep working before this table learns
/// about them.
pub fn resolve_exchange(input: &str) -> String {
  EXCHANGE_NAMES
    .get(&input.to_uppercase())
    .cloned()
    .unwrap_or_else(|| input.to_string())
}

/// Canonical names of every exchange in the bundled table
pub fn known_exchanges() -> impl Iterator<Item = &'static str> {
  EXCHANGE_NAMES.values().map(String::as_str)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolve_is_case_insensitive() {
    assert_eq!(resolve_exchange("coinbase"), "Coinbase");
    assert_eq!(resolve_exchange("COINBASE"), "Coinbase");
    assert_eq!(resolve_exchange("cOiNbAsE"), "Coinbase");
  }

  #[test]
  fn test_resolve_restores_mixed_canonical_casings() {
    assert_eq!(resolve_exchange("bitflyer"), "bitFlyer");
    assert_eq!(resolve_exchange("HITBTC"), "HitBTC");
    assert_eq!(resolve_exchange("Itbit"), "itBit");
    assert_eq!(resolve_exchange("okcoin"), "OKCoin");
  }

  #[test]
  fn test_every_table_entry_is_casing_stable() {
    for canonical in known_exchanges() {
      assert_eq!(resolve_exchange(&canonical.to_lowercase()), canonical);
      assert_eq!(resolve_exchange(&canonical.to_uppercase()), canonical);
      assert_eq!(resolve_exchange(canonical), canonical);
    }
  }

  #[test]
  fn test_unknown_exchange_passes_through() {
    assert_eq!(resolve_exchange("YoloTrade"), "YoloTrade");
  }
}
