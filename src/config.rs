use std::time::Duration;
use url::Url;

use crate::errors::{Result, VolleyError};
use crate::types::DEFAULT_SEVERITY;

/// Request timeout applied unless the caller overrides it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Validated invocation settings
///
/// Built from raw command-line values before any input is read, so a missing
/// or malformed destination is reported without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Webhook destination
    pub webhook_url: Url,

    /// Severity label, never empty
    pub severity: String,

    /// Request timeout, `None` for no timeout
    pub timeout: Option<Duration>,

    /// Treat non-2xx responses as failures
    pub fail_on_error_status: bool,
}

impl Settings {
    /// Validate raw values
    ///
    /// An empty or missing severity becomes [`DEFAULT_SEVERITY`].
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `webhook_url` is missing or empty
    /// - `webhook_url` does not parse
    /// - `webhook_url` is not `http` or `https`
    pub fn from_raw(webhook_url: Option<&str>, severity: Option<&str>) -> Result<Self> {
        let raw = webhook_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(VolleyError::MissingWebhookUrl)?;

        let webhook_url = Url::parse(raw).map_err(|source| VolleyError::InvalidUrl {
            url: raw.to_string(),
            source,
        })?;

        if !matches!(webhook_url.scheme(), "http" | "https") {
            return Err(VolleyError::UnsupportedScheme(
                webhook_url.scheme().to_string(),
            ));
        }

        let severity = severity
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SEVERITY)
            .to_string();

        Ok(Self {
            webhook_url,
            severity,
            timeout: Some(DEFAULT_TIMEOUT),
            fail_on_error_status: false,
        })
    }

    /// Set the request timeout (`None` disables it)
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Treat non-2xx responses from the receiver as failures
    pub fn with_fail_on_error_status(mut self, enabled: bool) -> Self {
        self.fail_on_error_status = enabled;
        self
    }
}
