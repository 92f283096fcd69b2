//! Exchange directory endpoints

use crate::transport::Transport;
use cc_core::{Endpoint, QueryParams, Result};
use cc_models::exchanges::ExchangeDirectory;
use std::sync::Arc;
use tracing::instrument;

/// Exchange directory endpoints
pub struct ExchangeEndpoints {
  transport: Arc<Transport>,
}

impl ExchangeEndpoints {
  /// Create a new exchange endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get every exchange with the coins it lists and the currencies each coin
  /// trades against
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cc_client::CryptoCompareClient;
  /// # async fn example(client: CryptoCompareClient) -> cc_core::Result<()> {
  /// let directory = client.exchanges().all().await?;
  /// for (exchange, pairs) in &directory {
  ///     println!("{}: {} coins listed", exchange, pairs.len());
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn all(&self) -> Result<ExchangeDirectory> {
    self.transport.get(Endpoint::ExchangeList, QueryParams::new()).await
  }
}
