use thiserror::Error;

/// Result type alias for volley operations
pub type Result<T> = std::result::Result<T, VolleyError>;

/// Errors that can occur while forwarding input to a webhook
#[derive(Debug, Error)]
pub enum VolleyError {
    /// Reading the input stream failed before end of stream
    #[error("Failed to read input: {0}")]
    InputRead(#[source] std::io::Error),

    /// Failed to serialize the alert document
    #[error("Failed to serialize alert: {0}")]
    Serialize(#[source] serde_json::Error),

    /// No webhook URL was supplied
    #[error("webhook-url is required")]
    MissingWebhookUrl,

    /// The webhook URL could not be parsed
    #[error("Invalid webhook URL '{url}': {source}")]
    InvalidUrl {
        /// URL as given by the caller
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The webhook URL uses a scheme the HTTP client cannot speak
    #[error("Unsupported webhook URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Failed to build HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest_middleware::Error),

    /// Receiver answered with a non-success status while strict status checking was on
    #[error("Webhook receiver error: HTTP {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body from the receiver
        message: String,
    },
}

impl VolleyError {
    /// Check if the error happened before any request left the process
    ///
    /// Returns `true` for input, serialization and request construction
    /// failures. Transport and receiver errors return `false`.
    pub fn is_before_send(&self) -> bool {
        !matches!(self, Self::Request(_) | Self::Api { .. })
    }

    /// Check if the request was cut off by the client timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Request(reqwest_middleware::Error::Reqwest(err)) => err.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = VolleyError::Api {
            status: 500,
            message: "Internal server error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Webhook receiver error: HTTP 500 - Internal server error"
        );
    }

    #[test]
    fn test_missing_url_display() {
        assert_eq!(
            VolleyError::MissingWebhookUrl.to_string(),
            "webhook-url is required"
        );
    }

    #[test]
    fn test_invalid_url_keeps_source() {
        let source = url::Url::parse("not a url").unwrap_err();
        let error = VolleyError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Invalid webhook URL 'not a url'"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_before_send_classification() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(VolleyError::InputRead(io).is_before_send());

        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        assert!(VolleyError::Serialize(json_err).is_before_send());

        assert!(VolleyError::MissingWebhookUrl.is_before_send());
        assert!(VolleyError::UnsupportedScheme("ftp".to_string()).is_before_send());

        let api = VolleyError::Api {
            status: 503,
            message: String::new(),
        };
        assert!(!api.is_before_send());
        assert!(!api.is_timeout());
    }
}
