//! Shared JSON-over-HTTP helpers.

use reqwest::Client;
use sceneweaver_error::HttpError;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};
use tracing::{debug, error, warn};

/// Build a reqwest client with the given timeout.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, HttpError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| HttpError::new(format!("Failed to create HTTP client: {}", e)))
}

/// POST a JSON body and decode a JSON response.
pub(crate) async fn post_json<B, R>(
    client: &Client,
    url: &str,
    api_key: &str,
    body: &B,
) -> Result<R, HttpError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = client
        .post(url)
        .header("x-goog-api-key", api_key)
        .header("content-type", "application/json")
        .json(body)
        .send()
        .await
        .map_err(|e| {
            error!(error = ?e, "Failed to send request");
            HttpError::new(format!("Request failed: {}", e))
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        error!(status = %status, body = %body, "Service returned error");
        return Err(HttpError::with_status(status.as_u16(), body));
    }

    response.json::<R>().await.map_err(|e| {
        error!(error = ?e, "Failed to decode response");
        HttpError::with_status(status.as_u16(), format!("Failed to decode response: {}", e))
    })
}

/// POST with exponential backoff on transient failures (no response, 429, 5xx).
pub(crate) async fn post_json_with_retry<B, R>(
    client: &Client,
    url: &str,
    api_key: &str,
    body: &B,
    max_retries: usize,
    backoff_ms: u64,
) -> Result<R, HttpError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let retry_strategy = ExponentialBackoff::from_millis(backoff_ms.max(1))
        .factor(2)
        .max_delay(Duration::from_secs(30))
        .map(jitter)
        .take(max_retries);

    Retry::spawn(retry_strategy, move || async move {
        match post_json(client, url, api_key, body).await {
            Ok(value) => Ok(value),
            Err(e) if e.is_transient() => {
                warn!(error = %e, "Transient error, will retry");
                Err(RetryError::Transient {
                    err: e,
                    retry_after: None,
                })
            }
            Err(e) => {
                debug!(error = %e, "Permanent error, failing immediately");
                Err(RetryError::Permanent(e))
            }
        }
    })
    .await
}
