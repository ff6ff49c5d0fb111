use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use super::status::expect_status;
use super::{AfterShip, TrackingApi};
use crate::context::CallContext;
use crate::error::{Error, Result};
use crate::model::{CreateTracking, Tracking};

#[derive(Serialize)]
struct CreateTrackingRequest<'a> {
    tracking: &'a CreateTracking,
}

#[derive(Deserialize)]
struct TrackingResponse {
    data: TrackingData,
}

#[derive(Deserialize)]
struct TrackingData {
    tracking: Tracking,
}

/// `.` and `..` are resolved away when joined into a URL path.
fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

#[async_trait]
impl TrackingApi for AfterShip {
    #[tracing::instrument(skip(self, ctx, payload), fields(tracking_number = %payload.tracking_number))]
    async fn create_tracking(
        &self,
        ctx: &CallContext,
        payload: &CreateTracking,
    ) -> Result<Tracking> {
        payload.validate()?;

        let body = CreateTrackingRequest { tracking: payload };
        let response = self
            .call(ctx, Method::POST, &["trackings"], Some(&body))
            .await?;
        let response = expect_status(response, StatusCode::CREATED)?;

        let TrackingResponse { data } = response.decode::<TrackingResponse>()?;
        info!(
            "Created tracking {} ({})",
            data.tracking.tracking_number, data.tracking.id
        );
        Ok(data.tracking)
    }

    #[tracing::instrument(skip(self, ctx))]
    async fn delete_tracking(
        &self,
        ctx: &CallContext,
        slug: &str,
        tracking_number: &str,
    ) -> Result<()> {
        if slug.is_empty() || tracking_number.is_empty() {
            return Err(Error::InvalidInput(
                "slug and tracking number must not be empty".to_string(),
            ));
        }
        if is_dot_segment(slug) || is_dot_segment(tracking_number) {
            return Err(Error::InvalidInput(
                "slug and tracking number must not be \".\" or \"..\"".to_string(),
            ));
        }

        let response = self
            .call::<()>(
                ctx,
                Method::DELETE,
                &["trackings", slug, tracking_number],
                None,
            )
            .await?;
        expect_status(response, StatusCode::OK)?;

        debug!("Deleted tracking {}/{}", slug, tracking_number);
        Ok(())
    }
}
