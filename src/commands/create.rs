use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use crate::api::TrackingApi;
use crate::context::CallContext;
use crate::model::CreateTracking;

/// Create a tracking and print it as JSON
#[tracing::instrument(skip(api, ctx, payload, out))]
pub async fn create<A: TrackingApi, W: Write>(
    api: &A,
    ctx: &CallContext,
    payload: CreateTracking,
    out: &mut W,
) -> Result<()> {
    debug!("Creating tracking for {}", payload.tracking_number);

    let tracking = api
        .create_tracking(ctx, &payload)
        .await
        .with_context(|| format!("Failed to create tracking {}", payload.tracking_number))?;

    let rendered =
        serde_json::to_string_pretty(&tracking).context("Failed to render tracking as JSON")?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}
