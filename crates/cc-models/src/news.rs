//! News feed and news provider models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news article from one of the integrated providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
  /// Article id
  pub id: String,

  /// Provider-side permalink
  #[serde(default)]
  pub guid: String,

  /// Unix timestamp of publication
  pub published_on: i64,

  /// Article image
  #[serde(rename = "imageurl", default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,

  /// Headline
  pub title: String,

  /// Article URL
  pub url: String,

  /// Provider key
  pub source: String,

  /// Article body or teaser
  #[serde(default)]
  pub body: String,

  /// `|`-separated provider tags
  #[serde(default)]
  pub tags: String,

  /// `|`-separated categories
  #[serde(default)]
  pub categories: String,

  /// Article language
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lang: Option<String>,

  /// Provider details
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_info: Option<NewsSourceInfo>,
}

impl NewsArticle {
  /// Publication time as a UTC datetime, `None` for out-of-range timestamps
  pub fn published_at(&self) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(self.published_on, 0)
  }
}

/// Provider details embedded in an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSourceInfo {
  /// Display name
  pub name: String,

  /// Feed language
  #[serde(default)]
  pub lang: String,

  /// Provider logo URL
  #[serde(default)]
  pub img: String,
}

/// A news provider integrated with the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsProvider {
  /// Provider key, used as the article `source`
  pub key: String,

  /// Display name
  pub name: String,

  /// Feed language
  #[serde(default)]
  pub lang: String,

  /// Provider logo URL
  #[serde(default)]
  pub img: String,
}
