//! HTTP submission client for the cataloging service.
//!
//! One unconditional form POST per import. Any 2xx response is success;
//! anything else is a submission error surfaced to the caller. There is no
//! retry and no backoff — each click is an independent unit of work.

use reqwest::Client;
use tracing::debug;
use url::form_urlencoded;

/// Errors from a submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Client for the cataloging service's import endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Build the `application/x-www-form-urlencoded` body:
    /// `url=<encoded>&tags=<encoded comma-joined>`.
    pub fn encode_form(target_url: &str, tags: &[String]) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("url", target_url)
            .append_pair("tags", &tags.join(","))
            .finish()
    }

    /// POST one import request to `service_url`.
    pub async fn submit(
        &self,
        service_url: &str,
        target_url: &str,
        tags: &[String],
    ) -> Result<(), SubmitError> {
        let body = Self::encode_form(target_url, tags);
        debug!(service = %service_url, target = %target_url, "Submitting import");

        let resp = self
            .client
            .post(service_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    SubmitError::InvalidUrl(e.to_string())
                } else {
                    SubmitError::Network(e.to_string())
                }
            })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let message = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            _ => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Err(SubmitError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
