//! HTTP client for supplier catalog endpoints.

use std::time::Duration;

use reqwest::Client;

use crate::error::SupplyError;
use crate::retry::retry_with_backoff;

/// HTTP client for fetching raw supplier payloads.
///
/// Each supplier endpoint publishes its whole catalog as one JSON document;
/// the body is returned as an opaque [`serde_json::Value`]. Shape
/// validation belongs to the supplier normalizers, not the transport.
///
/// Transient errors (429, 5xx, network failures) are automatically retried
/// with exponential backoff up to `max_retries` additional attempts.
pub struct SupplierClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff:
    /// `backoff_base_secs * 2^attempt`.
    backoff_base_secs: u64,
}

impl SupplierClient {
    /// Creates a `SupplierClient` with configured timeout, `User-Agent`,
    /// and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, SupplyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches one supplier's raw payload, with automatic retry on
    /// transient errors.
    ///
    /// The payload is parsed as arbitrary JSON, not as the canonical
    /// schema: a payload that is not even an array is still `Ok` here and
    /// handled downstream as an invalid batch shape.
    ///
    /// # Errors
    ///
    /// - [`SupplyError::HttpStatus`] — non-2xx response (429/5xx retried,
    ///   other 4xx not).
    /// - [`SupplyError::Http`] — network or TLS failure after all retries
    ///   exhausted.
    /// - [`SupplyError::Deserialize`] — response body is not valid JSON
    ///   (not retried).
    pub async fn fetch_payload(
        &self,
        supplier: &str,
        url: &str,
    ) -> Result<serde_json::Value, SupplyError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.to_owned();
            let supplier = supplier.to_owned();
            async move {
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(SupplyError::HttpStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                let payload = serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
                    SupplyError::Deserialize {
                        supplier: supplier.clone(),
                        source: e,
                    }
                })?;

                Ok(payload)
            }
        })
        .await
    }
}
