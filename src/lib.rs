//! # volley
//!
//! Forward line-oriented text to an [Alertmanager](https://prometheus.io/docs/alerting/latest/alertmanager/)-style
//! webhook receiver.
//!
//! Input lines (for example the output of an SNMP trap handler) are joined
//! into the alert text, the first non-empty line becomes the summary, and the
//! result is posted once as a webhook notification.
//!
//! ## Example
//!
//! ```rust,no_run
//! use volley::{forward, Settings};
//! use std::io::stdin;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::from_raw(Some("http://localhost:9093/hook"), Some("warning"))?;
//!
//!     forward(stdin().lock(), &settings).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod errors;
mod input;
mod pipeline;
mod types;

pub use client::WebhookClient;
pub use config::{Settings, DEFAULT_TIMEOUT};
pub use errors::{Result, VolleyError};
pub use input::{aggregate, AggregatedText};
pub use pipeline::{forward, forward_with};
pub use types::{
    AlertAnnotations, AlertDocument, AlertLabels, CommonAnnotations, CommonLabels, GroupLabels,
    WebhookAlert, ALERT_NAME, DEFAULT_SEVERITY,
};
