//! Query-parameter translation and URL construction.
//!
//! The min-API uses abbreviated, case-sensitive query-parameter names
//! (`fsym`, `toTs`, `tryConversion`). Callers work with the readable logical
//! names; the mapping to wire names is bundled with the crate and applied
//! here when the request URL is built.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// Logical option name -> wire query-parameter name.
///
/// Parsed once from the bundled table on first use; read-only afterward.
static QUERY_PARAM_MAP: Lazy<HashMap<String, String>> = Lazy::new(|| {
  serde_json::from_str(include_str!("../config/query_params.json"))
    .expect("bundled query_params.json must parse")
});

/// Looks up the wire name for a logical option key.
///
/// Returns `None` for keys the table does not catalogue; the caller decides
/// the fallback.
pub fn lookup(key: &str) -> Option<&'static str> {
  QUERY_PARAM_MAP.get(key).map(String::as_str)
}

/// A query-parameter value.
///
/// The closed set keeps stringification total: booleans render as literal
/// `true`/`false`, integers in base 10, strings verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
  Str(String),
  Int(i64),
  Bool(bool),
}

impl fmt::Display for ParamValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParamValue::Str(s) => write!(f, "{}", s),
      ParamValue::Int(i) => write!(f, "{}", i),
      ParamValue::Bool(b) => write!(f, "{}", b),
    }
  }
}

impl From<&str> for ParamValue {
  fn from(value: &str) -> Self {
    ParamValue::Str(value.to_string())
  }
}

impl From<String> for ParamValue {
  fn from(value: String) -> Self {
    ParamValue::Str(value)
  }
}

impl From<i64> for ParamValue {
  fn from(value: i64) -> Self {
    ParamValue::Int(value)
  }
}

impl From<i32> for ParamValue {
  fn from(value: i32) -> Self {
    ParamValue::Int(value as i64)
  }
}

impl From<u32> for ParamValue {
  fn from(value: u32) -> Self {
    ParamValue::Int(value as i64)
  }
}

impl From<bool> for ParamValue {
  fn from(value: bool) -> Self {
    ParamValue::Bool(value)
  }
}

/// Transient per-call bag of logical option keys and values.
///
/// Insertion order is irrelevant; [`build_url`] sorts the rendered pairs.
/// Keys are assumed unique; duplicates are a caller error and are rendered
/// as supplied rather than deduplicated.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
  entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
  /// Create an empty parameter bag
  pub fn new() -> Self {
    Self { entries: Vec::new() }
  }

  /// Add a parameter under its logical key
  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
    self.entries.push((key.into(), value.into()));
  }

  /// Number of parameters in the bag
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// True when no parameters have been added
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

/// Builds the full request URL for `base_url` and `params`.
///
/// Each logical key is renamed via the bundled parameter table; keys the
/// table has not catalogued are used verbatim, so parameters added upstream
/// keep working without a table update. Pairs are rendered as `name=value`
/// and sorted by the full rendered string (not by name alone), which makes
/// the output byte-identical for any insertion order. The query is joined
/// with `&` and appended after a literal `?`; an empty bag yields `base_url?`.
///
/// Values are emitted verbatim. Symbols, exchange names and numeric flags on
/// this API are URL-safe, and the comma in pre-joined symbol lists must stay
/// literal.
pub fn build_url(base_url: &str, params: &QueryParams) -> String {
  let mut pairs: Vec<String> = params
    .entries
    .iter()
    .map(|(key, value)| format!("{}={}", lookup(key).unwrap_or(key.as_str()), value))
    .collect();
  pairs.sort();
  format!("{}?{}", base_url, pairs.join("&"))
}

/// One symbol or several.
///
/// Multi-valued wire parameters (`fsyms`, `tsyms`, joined market lists) take
/// a single comma-separated string; the endpoint layer joins before the value
/// enters the bag, so the builder never needs to know which options are
/// multi-valued.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbols {
  One(String),
  Many(Vec<String>),
}

impl Symbols {
  /// Comma-joined form expected by the multi-symbol wire parameters
  pub fn join(&self) -> String {
    match self {
      Symbols::One(sym) => sym.clone(),
      Symbols::Many(syms) => syms.join(","),
    }
  }
}

impl From<&str> for Symbols {
  fn from(sym: &str) -> Self {
    Symbols::One(sym.to_string())
  }
}

impl From<String> for Symbols {
  fn from(sym: String) -> Self {
    Symbols::One(sym)
  }
}

impl From<Vec<String>> for Symbols {
  fn from(syms: Vec<String>) -> Self {
    Symbols::Many(syms)
  }
}

impl From<Vec<&str>> for Symbols {
  fn from(syms: Vec<&str>) -> Self {
    Symbols::Many(syms.into_iter().map(String::from).collect())
  }
}

impl From<&[&str]> for Symbols {
  fn from(syms: &[&str]) -> Self {
    Symbols::Many(syms.iter().map(|s| s.to_string()).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_lookup_known_keys() {
    assert_eq!(lookup("from_sym"), Some("fsym"));
    assert_eq!(lookup("from_syms"), Some("fsyms"));
    assert_eq!(lookup("to_sym"), Some("tsym"));
    assert_eq!(lookup("to_syms"), Some("tsyms"));
    assert_eq!(lookup("agg"), Some("aggregate"));
    assert_eq!(lookup("to_ts"), Some("toTs"));
    assert_eq!(lookup("tc"), Some("tryConversion"));
    assert_eq!(lookup("all_data"), Some("allData"));
    assert_eq!(lookup("utc_offset"), Some("UTCHourDiff"));
  }

  #[test]
  fn test_lookup_unknown_key_is_none() {
    assert_eq!(lookup("sign"), None);
  }

  #[test]
  fn test_single_known_key() {
    let mut params = QueryParams::new();
    params.insert("from_sym", "BTC");

    assert_eq!(build_url("https://x/y", &params), "https://x/y?fsym=BTC");
  }

  #[test]
  fn test_empty_bag_yields_bare_question_mark() {
    let params = QueryParams::new();

    assert_eq!(build_url("https://x/y", &params), "https://x/y?");
  }

  #[test]
  fn test_unknown_key_used_verbatim() {
    let mut params = QueryParams::new();
    params.insert("sign", true);

    assert_eq!(build_url("https://x/y", &params), "https://x/y?sign=true");
  }

  #[test]
  fn test_bool_and_int_rendering() {
    let mut params = QueryParams::new();
    params.insert("from_sym", "BTC");
    params.insert("to_sym", "USD");
    params.insert("limit", 10);
    params.insert("tc", false);

    assert_eq!(
      build_url("https://x/y", &params),
      "https://x/y?fsym=BTC&limit=10&tryConversion=false&tsym=USD"
    );
  }

  #[test]
  fn test_negative_utc_offset_rendering() {
    let mut params = QueryParams::new();
    params.insert("from_sym", "BTC");
    params.insert("to_sym", "USD");
    params.insert("utc_offset", -8);

    assert_eq!(
      build_url("https://min-api.cryptocompare.com/data/dayAvg", &params),
      "https://min-api.cryptocompare.com/data/dayAvg?UTCHourDiff=-8&fsym=BTC&tsym=USD"
    );
  }

  #[test]
  fn test_full_parameter_set_builds_documented_url() {
    let mut params = QueryParams::new();
    params.insert("agg", 10);
    params.insert("all_data", true);
    params.insert("e", "COINBASE");
    params.insert("from_sym", "BTC");
    params.insert("from_syms", "BTC,ETH");
    params.insert("limit", 10);
    params.insert("tc", false);
    params.insert("to_sym", "USD");
    params.insert("to_syms", "USD,EUR");
    params.insert("to_ts", 1452680400);
    params.insert("ts", 1452680400);

    assert_eq!(
      build_url("https://min-api.cryptocompare.com", &params),
      "https://min-api.cryptocompare.com?aggregate=10&allData=true&e=COINBASE\
       &fsym=BTC&fsyms=BTC,ETH&limit=10&toTs=1452680400&tryConversion=false\
       &ts=1452680400&tsym=USD&tsyms=USD,EUR"
    );
  }

  #[test]
  fn test_insertion_order_is_irrelevant() {
    let mut forward = QueryParams::new();
    forward.insert("from_sym", "BTC");
    forward.insert("to_sym", "USD");
    forward.insert("limit", 10);

    let mut reversed = QueryParams::new();
    reversed.insert("limit", 10);
    reversed.insert("to_sym", "USD");
    reversed.insert("from_sym", "BTC");

    assert_eq!(build_url("https://x/y", &forward), build_url("https://x/y", &reversed));
  }

  #[test]
  fn test_sorts_by_full_rendered_pair_not_by_name() {
    // "e2=A" < "e=Z" because '2' < '='; a name-only sort would put e first.
    let mut params = QueryParams::new();
    params.insert("e", "Z");
    params.insert("e2", "A");

    assert_eq!(build_url("https://x/y", &params), "https://x/y?e2=A&e=Z");
  }

  #[test]
  fn test_duplicate_keys_both_rendered() {
    let mut params = QueryParams::new();
    params.insert("e", "Coinbase");
    params.insert("e", "Kraken");

    assert_eq!(build_url("https://x/y", &params), "https://x/y?e=Coinbase&e=Kraken");
  }

  #[test]
  fn test_symbols_join() {
    assert_eq!(Symbols::from("BTC").join(), "BTC");
    assert_eq!(Symbols::from(vec!["BTC", "ETH", "LTC"]).join(), "BTC,ETH,LTC");
    assert_eq!(Symbols::from(vec!["USD".to_string()]).join(), "USD");
  }
}
