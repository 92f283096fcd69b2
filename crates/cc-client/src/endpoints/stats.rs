//! API usage stats endpoints

use crate::transport::Transport;
use cc_core::{Endpoint, QueryParams, Result};
use cc_models::stats::RateLimitStats;
use std::sync::Arc;
use tracing::instrument;

/// API usage stats endpoints
pub struct StatsEndpoints {
  transport: Arc<Transport>,
}

impl StatsEndpoints {
  /// Create a new stats endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Find out how many calls were made and how many are left in the current
  /// month, day, hour, minute and second windows
  #[instrument(skip(self))]
  pub async fn rate_limit(&self) -> Result<RateLimitStats> {
    self.transport.get(Endpoint::RateLimit, QueryParams::new()).await
  }
}
