use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::input::AggregatedText;

/// Value of the `alertname` label on every document sent by volley
pub const ALERT_NAME: &str = "snmptrap";

/// Severity used when the caller does not supply one
pub const DEFAULT_SEVERITY: &str = "critical";

/// Labels shared by every alert in the notification
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommonLabels {
    pub alertname: String,
    /// Not populated by volley
    pub node: String,
    /// Not populated by volley
    pub service_name: String,
    pub severity: String,
}

/// Annotations shared by every alert in the notification
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommonAnnotations {
    pub summary: String,
    pub text: String,
}

/// Labels the notification was grouped by. Always empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupLabels {
    pub alertname: String,
    pub severity: String,
}

/// Per-alert labels inside [`WebhookAlert`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertLabels {
    pub alertname: String,
    pub node: String,
    pub service_name: String,
    pub severity: String,
}

/// Per-alert annotations inside [`WebhookAlert`]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertAnnotations {
    pub firing_text: String,
    pub resolved_text: String,
}

/// Single entry of the `alerts` array
///
/// Part of the receiver's schema only; volley never adds entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAlert {
    pub status: String,
    pub labels: AlertLabels,
    pub annotations: AlertAnnotations,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(rename = "generatorURL")]
    pub generator_url: String,
}

/// Alertmanager webhook notification
///
/// Only `commonLabels.alertname`, `commonLabels.severity`,
/// `commonAnnotations.summary` and `commonAnnotations.text` carry data.
/// Everything else is kept at its zero value so the document matches the
/// receiver's schema.
///
/// See: <https://prometheus.io/docs/alerting/latest/configuration/#webhook_config>
///
/// # Example
///
/// ```rust
/// use volley::{AggregatedText, AlertDocument};
///
/// let text = AggregatedText {
///     body: "linkDown ifIndex=3".to_string(),
///     summary: "linkDown ifIndex=3".to_string(),
/// };
/// let doc = AlertDocument::new(&text, "warning");
///
/// assert_eq!(doc.common_labels.alertname, "snmptrap");
/// assert_eq!(doc.common_labels.severity, "warning");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertDocument {
    pub receiver: String,
    pub status: String,
    pub alerts: Vec<WebhookAlert>,
    pub group_labels: GroupLabels,
    pub common_labels: CommonLabels,
    pub common_annotations: CommonAnnotations,
    #[serde(rename = "externalURL")]
    pub external_url: String,
    pub version: String,
    pub group_key: String,
    pub id: String,
}

impl AlertDocument {
    /// Build the document for aggregated input
    ///
    /// `severity` is used verbatim, including when it is empty.
    pub fn new(text: &AggregatedText, severity: &str) -> Self {
        Self {
            common_labels: CommonLabels {
                alertname: ALERT_NAME.to_string(),
                severity: severity.to_string(),
                ..Default::default()
            },
            common_annotations: CommonAnnotations {
                summary: text.summary.clone(),
                text: text.body.clone(),
            },
            ..Default::default()
        }
    }

    /// Get the alertname label
    pub fn alertname(&self) -> &str {
        &self.common_labels.alertname
    }
}
