use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::webhook::WebhookPayload;

/// Parse a webhook payload from a file (or stdin) and print a summary
#[tracing::instrument(skip(out))]
pub fn webhook<W: Write>(input: Option<&Path>, out: &mut W) -> Result<()> {
    let body = match input {
        Some(path) => {
            debug!("Reading webhook payload from {:?}", path);
            std::fs::read(path)
                .with_context(|| format!("Failed to read webhook payload from {:?}", path))?
        }
        None => {
            debug!("Reading webhook payload from stdin");
            let mut body = Vec::new();
            std::io::stdin()
                .read_to_end(&mut body)
                .context("Failed to read webhook payload from stdin")?;
            body
        }
    };

    let payload = WebhookPayload::from_slice(&body).context("Invalid webhook payload")?;
    writeln!(out, "{}", summarize(&payload))?;
    Ok(())
}

/// One-line description of a webhook event.
pub fn summarize(payload: &WebhookPayload) -> String {
    let tracking = &payload.tracking;
    let tag = tracking
        .tag
        .as_ref()
        .map(|tag| tag.as_str())
        .unwrap_or("-");
    let carrier = tracking.carrier().unwrap_or("-");

    let mut summary = format!(
        "{} {}/{} tag={} checkpoints={}",
        payload.event,
        carrier,
        tracking.tracking_number,
        tag,
        tracking.checkpoints.len()
    );
    if payload.is_tracking_first_tag {
        summary.push_str(" first-tag");
    }
    if let Some(latest) = tracking.latest_checkpoint() {
        summary.push_str(&format!(" latest=\"{}\"", latest.message));
    }
    summary
}
