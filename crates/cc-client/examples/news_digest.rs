//! News Digest Example
//!
//! This example demonstrates how to use cc-client to:
//! - List the integrated news providers
//! - Fetch the latest articles
//! - Group articles by provider and print a short digest

use std::collections::HashMap;

use cc_client::CryptoCompareClient;
use cc_core::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  let config = Config::from_env()?;
  let client = CryptoCompareClient::new(config)?;

  let providers = client.news().providers().await?;
  println!("{} news providers integrated", providers.len());

  let articles = client.news().all().await?;

  let mut by_source: HashMap<&str, usize> = HashMap::new();
  for article in &articles {
    *by_source.entry(article.source.as_str()).or_insert(0) += 1;
  }

  println!("\nArticles per provider:");
  let mut counts: Vec<_> = by_source.into_iter().collect();
  counts.sort_by(|a, b| b.1.cmp(&a.1));
  for (source, count) in counts {
    println!("  {:<20} {}", source, count);
  }

  println!("\nLatest headlines:");
  for article in articles.iter().take(10) {
    let published = article
      .published_at()
      .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
      .unwrap_or_else(|| "unknown".to_string());
    println!("  [{}] {} - {}", published, article.source, article.title);
  }

  Ok(())
}
