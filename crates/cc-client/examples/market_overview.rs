//! Market Overview Example
//!
//! This example demonstrates how to use cc-client to:
//! - Get current prices for a basket of coins
//! - Pull full quotes with 24h statistics
//! - Fetch daily candles and compute a simple range
//! - Rank the busiest trading pairs
//! - Handle errors consistently

use cc_client::endpoints::history::HistoryOptions;
use cc_client::endpoints::price::PriceOptions;
use cc_client::endpoints::top_pairs::TopPairsOptions;
use cc_client::CryptoCompareClient;
use cc_core::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  // Load configuration from environment
  let config = Config::from_env()?;
  let client = CryptoCompareClient::new(config)?;

  // Current prices for a small basket
  let coins = vec!["BTC", "ETH", "LTC"];
  let prices = client.price().find(coins.clone(), vec!["USD", "EUR"], &PriceOptions::default()).await?;

  println!("Current prices:");
  for coin in &coins {
    if let Some(quotes) = prices.get(*coin) {
      let usd = quotes.get("USD").copied().unwrap_or(f64::NAN);
      let eur = quotes.get("EUR").copied().unwrap_or(f64::NAN);
      println!("  {:>4}  ${:<12} €{:<12}", coin, usd, eur);
    }
  }

  // Full quote for BTC/USD with 24h statistics
  let full = client.price().full("BTC", "USD", &PriceOptions::default()).await?;
  if let Some(raw) = full.raw.get("BTC").and_then(|q| q.get("USD")) {
    println!("\nBTC/USD on {}:", raw.market);
    println!("  price      {}", raw.price);
    println!("  24h high   {}", raw.high_24_hour);
    println!("  24h low    {}", raw.low_24_hour);
    println!("  24h volume {}", raw.volume_24_hour);
  }

  // Last 30 daily candles for ETH/USD
  let opts = HistoryOptions { limit: Some(30), ..Default::default() };
  let candles = client.history().day("ETH", "USD", &opts).await?;
  let high = candles.data.iter().map(|p| p.high).fold(f64::MIN, f64::max);
  let low = candles.data.iter().map(|p| p.low).fold(f64::MAX, f64::min);
  println!("\nETH/USD {} candles, 30d range {:.2} - {:.2}", candles.data.len(), low, high);

  // Busiest ETH pairs by volume
  let pairs = client.top_pairs().find("ETH", &TopPairsOptions { limit: Some(5) }).await?;
  println!("\nTop ETH pairs:");
  for pair in &pairs.data {
    println!("  {}/{} vol24h {}", pair.from_symbol, pair.to_symbol, pair.volume_24h);
  }

  Ok(())
}
