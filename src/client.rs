use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::errors::{Result, VolleyError};
use crate::types::AlertDocument;

/// Client for posting alert documents to a webhook receiver
///
/// Every call to [`send`](Self::send) makes exactly one request. There is no
/// retry.
///
/// # Example
///
/// ```rust,no_run
/// use volley::{AggregatedText, AlertDocument, WebhookClient};
/// use url::Url;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = WebhookClient::new(
///         Url::parse("http://localhost:9093/hook")?,
///         Some(Duration::from_secs(10)),
///     )?;
///
///     let text = AggregatedText {
///         body: "coldStart".to_string(),
///         summary: "coldStart".to_string(),
///     };
///
///     client.send(&AlertDocument::new(&text, "critical")).await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct WebhookClient {
    client: ClientWithMiddleware,
    webhook_url: Url,
    fail_on_error_status: bool,
}

impl WebhookClient {
    /// Create a new webhook client
    ///
    /// # Arguments
    ///
    /// * `webhook_url` - Full URL the document is posted to
    /// * `timeout` - Request timeout, `None` to wait indefinitely
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(webhook_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(VolleyError::BuildHttpClient)?;

        let client = ClientBuilder::new(client).build();

        Ok(Self::with_client(client, webhook_url))
    }

    /// Create a new client with a custom reqwest middleware client
    pub fn with_client(client: ClientWithMiddleware, webhook_url: Url) -> Self {
        Self {
            client,
            webhook_url,
            fail_on_error_status: false,
        }
    }

    /// Report non-2xx responses as [`VolleyError::Api`]
    ///
    /// Off by default: any response from the receiver counts as delivered.
    pub fn fail_on_error_status(mut self, enabled: bool) -> Self {
        self.fail_on_error_status = enabled;
        self
    }

    /// Post one alert document
    ///
    /// Returns the status code the receiver answered with.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document cannot be serialized (nothing is sent)
    /// - The HTTP request fails to complete
    /// - The receiver answers non-2xx and strict status checking is on
    #[instrument(
        name = "WebhookClient::send",
        skip_all,
        fields(
            alertname = document.alertname(),
            severity = %document.common_labels.severity
        )
    )]
    pub async fn send(&self, document: &AlertDocument) -> Result<StatusCode> {
        let payload = serde_json::to_vec(document).map_err(VolleyError::Serialize)?;

        debug!(url = %self.webhook_url, bytes = payload.len(), "Posting alert to webhook");

        let response = self
            .client
            .post(self.webhook_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(VolleyError::Request)?;

        let status = response.status();

        if !status.is_success() {
            if self.fail_on_error_status {
                let message = response.text().await.unwrap_or_default();
                return Err(VolleyError::Api {
                    status: status.as_u16(),
                    message,
                });
            }
            warn!(status = status.as_u16(), "Webhook receiver answered with an error status");
        }

        info!(status = status.as_u16(), "Alert delivered");
        Ok(status)
    }

    /// Get the webhook URL
    pub fn webhook_url(&self) -> &Url {
        &self.webhook_url
    }
}
