//! # cc-models
//!
//! Data models for CryptoCompare min-API responses.
//!
//! This crate provides typed Rust structures for the min-API response
//! formats: current and historical prices, OHLC candle series, coin and
//! exchange metadata, news, and rate-limit stats.
//!
//! The min-API types some fields inconsistently across endpoints (the same
//! field may arrive as a number on one path and a string on another); those
//! fields are modeled as `serde_json::Value` rather than guessed at.
//!
//! ## Usage
//!
//! ```ignore
//! use cc_models::history::HistoryResponse;
//! use cc_models::price::PriceMap;
//!
//! // Deserialize API responses
//! let candles: HistoryResponse = serde_json::from_str(&response_json)?;
//! let prices: PriceMap = serde_json::from_str(&price_json)?;
//! ```

#![warn(clippy::all)]

pub mod coins;
pub mod common;
pub mod exchanges;
pub mod history;
pub mod news;
pub mod price;
pub mod stats;
pub mod top_pairs;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use coins::*;
pub use exchanges::*;
pub use history::*;
pub use news::*;
pub use price::*;
pub use stats::*;
pub use top_pairs::*;
