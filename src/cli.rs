//! Command-line definitions for volley.

use std::time::Duration;

use clap::Parser;

use volley::{Result, Settings};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VOLLEY_GIT_REVISION"),
    ")\nbuild at ",
    env!("VOLLEY_BUILD_DATE"),
    " (with ",
    env!("VOLLEY_RUSTC_VERSION"),
    ") by ",
    env!("VOLLEY_BUILD_USER"),
);

/// Forward text from stdin to an Alertmanager-style webhook.
#[derive(Parser, Debug)]
#[command(name = "volley")]
#[command(about = "Forward text from stdin to an Alertmanager-style webhook")]
#[command(version, long_version = LONG_VERSION)]
pub(crate) struct Cli {
    /// Webhook URL the alert is posted to
    #[arg(short, long, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Severity label (defaults to "critical")
    #[arg(short, long, value_name = "LEVEL")]
    pub severity: Option<String>,

    /// Request timeout in seconds, 0 to wait indefinitely
    #[arg(short, long, value_name = "SECS", default_value_t = volley::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Exit with an error when the receiver answers with a non-2xx status
    #[arg(long)]
    pub fail_on_error_status: bool,
}

impl Cli {
    /// Validate the parsed flags into pipeline settings.
    pub(crate) fn settings(&self) -> Result<Settings> {
        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));

        Ok(
            Settings::from_raw(self.webhook_url.as_deref(), self.severity.as_deref())?
                .with_timeout(timeout)
                .with_fail_on_error_status(self.fail_on_error_status),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volley::VolleyError;

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["volley", "-w", "http://localhost/hook", "-s", "warning"])
            .unwrap();
        let settings = cli.settings().unwrap();
        assert_eq!(settings.webhook_url.as_str(), "http://localhost/hook");
        assert_eq!(settings.severity, "warning");
        assert_eq!(settings.timeout, Some(volley::DEFAULT_TIMEOUT));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let cli = Cli::try_parse_from([
            "volley",
            "--webhook-url",
            "http://localhost/hook",
            "--timeout",
            "0",
            "--fail-on-error-status",
        ])
        .unwrap();
        let settings = cli.settings().unwrap();
        assert_eq!(settings.timeout, None);
        assert!(settings.fail_on_error_status);
        assert_eq!(settings.severity, "critical");
    }

    #[test]
    fn test_long_version_carries_build_info() {
        assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(LONG_VERSION.contains("\nbuild at "));
    }

    #[test]
    fn test_missing_url_is_validation_error() {
        let cli = Cli::try_parse_from(["volley"]).unwrap();
        assert!(matches!(cli.settings(), Err(VolleyError::MissingWebhookUrl)));
    }
}
