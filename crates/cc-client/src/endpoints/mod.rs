//! Per-resource endpoint modules
//!
//! Every endpoint struct holds a shared [`Transport`](crate::transport::Transport)
//! and exposes async methods that assemble the logical query parameters for
//! one resource family and hand them to the transport. The structs are cheap
//! to create; [`CryptoCompareClient`](crate::client::CryptoCompareClient)
//! builds them on demand.

pub mod coins;
pub mod exchanges;
pub mod history;
pub mod news;
pub mod price;
pub mod stats;
pub mod top_pairs;
