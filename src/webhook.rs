//! Shape of the notifications the service posts to webhook subscribers.
//!
//! Receiving them is up to the application; this module only decodes the
//! body.

use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Tracking;

/// A tracking update notification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookPayload {
    pub event_id: String,
    /// Event type, e.g. `tracking_update`.
    #[serde(rename = "Event", alias = "event")]
    pub event: String,
    /// Set when this is the first tag change for the tracking.
    pub is_tracking_first_tag: bool,
    #[serde(rename = "msg")]
    pub tracking: Tracking,
    /// Unix seconds.
    #[serde(rename = "ts")]
    pub timestamp: i64,
}

impl WebhookPayload {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(Error::Decoding)
    }

    /// When the service emitted the event. `None` for pre-epoch timestamps.
    pub fn emitted_at(&self) -> Option<SystemTime> {
        let seconds = u64::try_from(self.timestamp).ok()?;
        UNIX_EPOCH.checked_add(Duration::from_secs(seconds))
    }
}

impl FromStr for WebhookPayload {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    const PAYLOAD: &str = r#"{
        "event_id": "d9ab7e6c-2c4e-4f2b-9a43-0d6a0f1e9b1c",
        "Event": "tracking_update",
        "is_tracking_first_tag": true,
        "msg": {
            "id": "53aa7b5c415a670000000021",
            "tracking_number": "123456789",
            "slug": "dhl",
            "tag": "OutForDelivery",
            "checkpoints": [
                {"slug": "dhl", "tag": "InTransit", "message": "Departed"},
                {"slug": "dhl", "tag": "OutForDelivery", "message": "With courier"}
            ]
        },
        "ts": 1403747200
    }"#;

    #[test]
    fn test_parse_payload() {
        let payload: WebhookPayload = PAYLOAD.parse().unwrap();
        assert_eq!(payload.event, "tracking_update");
        assert!(payload.is_tracking_first_tag);
        assert_eq!(payload.tracking.tracking_number, "123456789");
        assert_eq!(payload.tracking.tag, Some(Tag::OUT_FOR_DELIVERY));
        assert_eq!(payload.tracking.checkpoints.len(), 2);
        assert_eq!(payload.tracking.checkpoints[0].message, "Departed");
        assert_eq!(
            payload.emitted_at(),
            Some(UNIX_EPOCH + Duration::from_secs(1403747200))
        );
    }

    #[test]
    fn test_lowercase_event_key_accepted() {
        let payload: WebhookPayload =
            r#"{"event_id": "1", "event": "tracking_update", "ts": 0}"#.parse().unwrap();
        assert_eq!(payload.event, "tracking_update");
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let payload = WebhookPayload {
            event: "tracking_update".to_string(),
            timestamp: 5,
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["Event"], "tracking_update");
        assert_eq!(value["ts"], 5);
        assert!(value.get("msg").is_some());
    }

    #[test]
    fn test_malformed_payload_is_decoding_error() {
        let result = WebhookPayload::from_slice(b"{\"ts\": \"yesterday\"}");
        assert!(matches!(result, Err(Error::Decoding(_))));
    }

    #[test]
    fn test_negative_timestamp() {
        let payload = WebhookPayload {
            timestamp: -1,
            ..Default::default()
        };
        assert_eq!(payload.emitted_at(), None);
    }
}
