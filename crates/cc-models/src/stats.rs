//! API usage stats models

use serde::{Deserialize, Serialize};

/// Response of the `stats/rate/limit` resource: calls made and calls left in
/// the current month, day, hour, minute and second windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimitStats {
  /// Human-readable status message
  #[serde(rename = "Message", default, skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,

  /// Calls already made per window
  #[serde(rename = "CallsMade", default)]
  pub calls_made: CallTally,

  /// Calls remaining per window
  #[serde(rename = "CallsLeft", default)]
  pub calls_left: CallTally,
}

/// Call counts per rate-limit window. Windows the API does not report are
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CallTally {
  /// Current calendar month
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub month: Option<i64>,

  /// Current day
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub day: Option<i64>,

  /// Current hour
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hour: Option<i64>,

  /// Current minute
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub minute: Option<i64>,

  /// Current second
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub second: Option<i64>,
}
