//! Client for the AfterShip shipment tracking API.
//!
//! ```no_run
//! use aftership::{AfterShip, CallContext, ClientConfig, CreateTracking, TrackingApi};
//!
//! # async fn run() -> aftership::Result<()> {
//! let client = AfterShip::new(ClientConfig::new("my-api-key"))?;
//! let ctx = CallContext::new().with_timeout(std::time::Duration::from_secs(10));
//!
//! let tracking = client
//!     .create_tracking(&ctx, &CreateTracking::new("1Z999AA10123456784").with_slug("ups"))
//!     .await?;
//! client.delete_tracking(&ctx, "ups", &tracking.tracking_number).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod model;
pub mod webhook;

pub use api::{AfterShip, TrackingApi};
pub use config::ClientConfig;
pub use context::CallContext;
pub use error::{Error, ErrorMeta, Result, UnexpectedStatus};
pub use model::{
    Checkpoint, CreateTracking, DeliveryType, PushTarget, StringOrList, Tag, Tracking,
};
pub use tokio_util::sync::CancellationToken;
pub use webhook::WebhookPayload;
