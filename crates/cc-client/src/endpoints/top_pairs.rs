//! Top trading pairs endpoints

use crate::transport::Transport;
use cc_core::{Endpoint, QueryParams, Result};
use cc_models::top_pairs::TopPairsResponse;
use std::sync::Arc;
use tracing::instrument;

/// Optional parameters for [`TopPairsEndpoints::find`]
#[derive(Debug, Default, Clone)]
pub struct TopPairsOptions {
  /// Number of pairs to return; the API default is 5, max 2000
  pub limit: Option<u32>,
}

/// Top trading pairs endpoints
pub struct TopPairsEndpoints {
  transport: Arc<Transport>,
}

impl TopPairsEndpoints {
  /// Create a new top pairs endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the top pairs by 24h volume for a currency, from aggregated data
  ///
  /// # Arguments
  ///
  /// * `from_sym` - Base symbol to rank pairs for (e.g. "ETH")
  /// * `opts` - Optional result limit
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cc_client::CryptoCompareClient;
  /// # use cc_client::endpoints::top_pairs::TopPairsOptions;
  /// # async fn example(client: CryptoCompareClient) -> cc_core::Result<()> {
  /// let pairs = client.top_pairs().find("ETH", &TopPairsOptions::default()).await?;
  /// for pair in &pairs.data {
  ///     println!("{}/{}: {}", pair.from_symbol, pair.to_symbol, pair.volume_24h);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, opts), fields(from_sym))]
  pub async fn find(&self, from_sym: &str, opts: &TopPairsOptions) -> Result<TopPairsResponse> {
    let mut params = QueryParams::new();
    params.insert("from_sym", from_sym);
    if let Some(limit) = opts.limit {
      params.insert("limit", limit);
    }

    self.transport.get(Endpoint::TopPairs, params).await
  }
}
