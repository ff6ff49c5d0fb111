use std::io::Write;

use anyhow::{Context, Result};

use crate::api::TrackingApi;
use crate::context::CallContext;

/// Delete a tracking
#[tracing::instrument(skip(api, ctx, out))]
pub async fn delete<A: TrackingApi, W: Write>(
    api: &A,
    ctx: &CallContext,
    slug: &str,
    tracking_number: &str,
    out: &mut W,
) -> Result<()> {
    api.delete_tracking(ctx, slug, tracking_number)
        .await
        .with_context(|| format!("Failed to delete tracking {}/{}", slug, tracking_number))?;

    writeln!(out, "Deleted tracking {}/{}", slug, tracking_number)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTrackingApi;
    use crate::error::Error;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_delete_prints_confirmation() {
        let mut api = MockTrackingApi::new();
        api.expect_delete_tracking()
            .with(mockall::predicate::always(), eq("ups"), eq("1Z999"))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut out = Vec::new();
        delete(&api, &CallContext::new(), "ups", "1Z999", &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Deleted tracking ups/1Z999\n");
    }

    #[tokio::test]
    async fn test_delete_cancelled() {
        let mut api = MockTrackingApi::new();
        api.expect_delete_tracking()
            .times(1)
            .returning(|_, _, _| Err(Error::Cancelled));

        let mut out = Vec::new();
        let err = delete(&api, &CallContext::new(), "ups", "1Z999", &mut out)
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<Error>().unwrap().is_cancellation());
        assert!(out.is_empty());
    }
}
