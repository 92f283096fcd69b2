//! HTTP transport layer for min-API requests

use cc_core::params::{build_url, QueryParams};
use cc_core::{Config, Endpoint, Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Status fields the min-API attaches to object-shaped responses
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
  #[serde(rename = "Response")]
  response: Option<String>,

  #[serde(rename = "Message")]
  message: Option<String>,
}

/// HTTP transport layer for making requests to the min-API
#[derive(Debug)]
pub struct Transport {
  client: Client,
  base_url: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent("cc-client/0.1.0")
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.clone(),
      timeout: Duration::from_secs(config.timeout_secs),
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.cryptocompare.com".to_string(),
      timeout: Duration::from_secs(30),
    }
  }

  /// Make a GET request to a min-API resource
  ///
  /// # Arguments
  ///
  /// * `endpoint` - The min-API resource to call
  /// * `params` - Logical query parameters for the request
  ///
  /// # Returns
  ///
  /// Returns a `Result` containing the deserialized response or an error.
  ///
  /// Parameterless resources are requested at the bare path; otherwise the
  /// query string is built from `params` (logical keys renamed to wire names,
  /// rendered pairs sorted). A non-success status surfaces as `Error::Http`.
  /// The API also reports failures inside successful responses
  /// (`"Response": "Error"` with a `Message`); those surface as `Error::Api`.
  #[instrument(skip(self, params), fields(endpoint = %endpoint))]
  pub async fn get<T>(&self, endpoint: Endpoint, params: QueryParams) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.request_url(endpoint, &params);
    debug!("Making request to: {}", url);

    let response = self.make_request(&url).await?;
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response body length: {} bytes", text.len());

    self.check_api_error(&text)?;

    match serde_json::from_str::<T>(&text) {
      Ok(data) => {
        info!("Successfully parsed response for endpoint: {}", endpoint);
        Ok(data)
      }
      Err(e) => {
        error!("Failed to parse JSON response: {}", e);
        error!(
          "Response text (first 500 chars): {}",
          &text[..std::cmp::min(500, text.len())]
        );
        Err(Error::Parse(format!(
          "Failed to parse response: {}. Response: {}",
          e,
          &text[..std::cmp::min(200, text.len())]
        )))
      }
    }
  }

  /// Build the full URL for an API request.
  ///
  /// An empty bag requests the bare resource path, the way the original API
  /// consumers call the parameterless resources.
  fn request_url(&self, endpoint: Endpoint, params: &QueryParams) -> String {
    let base = format!("{}/{}", self.base_url, endpoint);
    if params.is_empty() {
      base
    } else {
      build_url(&base, params)
    }
  }

  /// Make the actual HTTP request
  async fn make_request(&self, url: &str) -> Result<Response> {
    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();

    if status.is_success() {
      debug!("Request successful with status: {}", status);
      Ok(response)
    } else {
      error!("Request failed with status: {}", status);
      Err(Error::Http(format!("HTTP error: {}", status)))
    }
  }

  /// Check for the min-API error envelope in the response
  fn check_api_error(&self, response_text: &str) -> Result<()> {
    // Array-shaped bodies (the news feeds) never carry the envelope and
    // simply fail this parse.
    if let Ok(envelope) = serde_json::from_str::<ApiEnvelope>(response_text) {
      if envelope.response.as_deref() == Some("Error") {
        return Err(Error::Api(
          envelope.message.unwrap_or_else(|| "unspecified API error".to_string()),
        ));
      }
    }

    Ok(())
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}
