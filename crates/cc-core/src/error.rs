use thiserror::Error;

/// The main error type for cc-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Serialization/Deserialization error
  #[error("Serialization error")]
  Serde(#[from] serde_json::Error),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Error reported by the min-API inside a successful HTTP response
  #[error("API error: {0}")]
  Api(String),

  /// Parse error for response decoding
  #[error("Parse error: {0}")]
  Parse(String),

  /// Invalid response from API
  #[error("Invalid API response: {0}")]
  InvalidResponse(String),
}

/// Result type alias for cc-* crates
pub type Result<T> = std::result::Result<T, Error>;
