//! Exchange directory models

use std::collections::BTreeMap;

/// Coin symbol -> quote currencies the exchange trades it against
pub type ExchangePairs = BTreeMap<String, Vec<String>>;

/// Response of the `all/exchanges` resource: exchange name -> traded pairs,
/// e.g. `{"Coinbase": {"BTC": ["USD", "GBP", "EUR", "CAD"]}}`.
pub type ExchangeDirectory = BTreeMap<String, ExchangePairs>;
