use reqwest::StatusCode;
use std::io::BufRead;
use tracing::{debug, instrument};

use crate::client::WebhookClient;
use crate::config::Settings;
use crate::errors::Result;
use crate::input::aggregate;
use crate::types::AlertDocument;

/// Read `input`, build the alert document and post it once
///
/// `input` is read to the end synchronously before the request is made, so
/// the calling task blocks while it waits on the reader. Pass an in-memory
/// reader, or call this from `spawn_blocking`, when sharing a multi-task
/// runtime.
///
/// # Errors
///
/// Returns the first error from reading, client construction, serialization
/// or delivery. Nothing is sent if reading fails.
#[instrument(name = "volley::forward", skip_all)]
pub async fn forward<R: BufRead>(input: R, settings: &Settings) -> Result<StatusCode> {
    let client = WebhookClient::new(settings.webhook_url.clone(), settings.timeout)?
        .fail_on_error_status(settings.fail_on_error_status);

    forward_with(input, &client, &settings.severity).await
}

/// Same as [`forward`] with a prebuilt client
///
/// The reader is consumed synchronously, as in [`forward`].
pub async fn forward_with<R: BufRead>(
    input: R,
    client: &WebhookClient,
    severity: &str,
) -> Result<StatusCode> {
    let text = aggregate(input)?;
    debug!(url = %client.webhook_url(), "Input aggregated");
    if text.is_empty() {
        debug!("Input was empty, sending alert without text");
    }

    let document = AlertDocument::new(&text, severity);
    client.send(&document).await
}
