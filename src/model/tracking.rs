use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DeliveryType, PushTarget, StringOrList, Tag, null_as_default};

/// A shipment as known to the service, including its checkpoint history.
///
/// Only ever produced by the service. Fields the service omits or sends as
/// `null` decode to their empty value, and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tracking {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tracking_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<StringOrList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_ship_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_origin_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_destination_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<PushTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<PushTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<StringOrList>,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub subscribed_emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smses: Option<StringOrList>,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub subscribed_smses: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    /// Days in transit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_country_iso3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_country_iso3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_promised_delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<DeliveryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_package_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_weight_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_pickup_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_delivery_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtag_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_mile_tracking_supported: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub return_to_sender: bool,
    /// Chronological, in the order the service sent them.
    #[serde(deserialize_with = "null_as_default")]
    pub checkpoints: Vec<Checkpoint>,
}

impl Tracking {
    /// The most recent checkpoint, if any.
    pub fn latest_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    /// The carrier slug when the service has settled on exactly one.
    pub fn carrier(&self) -> Option<&str> {
        match self.slug.as_ref()? {
            StringOrList::One(slug) => Some(slug),
            StringOrList::Many(slugs) if slugs.len() == 1 => Some(&slugs[0]),
            StringOrList::Many(_) => None,
        }
    }
}

/// One event in a shipment's history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Checkpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_iso3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtag_message: Option<String>,
}
