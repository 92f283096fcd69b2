//! News endpoints

use crate::transport::Transport;
use cc_core::{Endpoint, QueryParams, Result};
use cc_models::news::{NewsArticle, NewsProvider};
use std::sync::Arc;
use tracing::instrument;

/// News endpoints
pub struct NewsEndpoints {
  transport: Arc<Transport>,
}

impl NewsEndpoints {
  /// Create a new news endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get the latest articles from the integrated news providers
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cc_client::CryptoCompareClient;
  /// # async fn example(client: CryptoCompareClient) -> cc_core::Result<()> {
  /// let articles = client.news().all().await?;
  /// for article in articles.iter().take(5) {
  ///     println!("{} - {}", article.source, article.title);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn all(&self) -> Result<Vec<NewsArticle>> {
    self.transport.get(Endpoint::News, QueryParams::new()).await
  }

  /// Get the news providers the API is integrated with
  #[instrument(skip(self))]
  pub async fn providers(&self) -> Result<Vec<NewsProvider>> {
    self.transport.get(Endpoint::NewsProviders, QueryParams::new()).await
  }
}
