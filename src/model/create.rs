use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DeliveryType, PushTarget, StringOrList, Tracking};
use crate::error::{Error, Result};

/// Payload for creating a tracking. Only `tracking_number` is required;
/// unset fields are left out of the request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateTracking {
    pub tracking_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_ship_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_origin_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_destination_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<PushTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<PushTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smses: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_country_iso3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_country_iso3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_promised_delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<DeliveryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_note: Option<String>,
}

impl CreateTracking {
    pub fn new(tracking_number: impl Into<String>) -> Self {
        Self {
            tracking_number: tracking_number.into(),
            ..Default::default()
        }
    }

    pub fn with_slug(mut self, slug: impl Into<StringOrList>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Checks the constraints the service enforces on create, so obviously
    /// bad payloads fail before a request is made.
    pub fn validate(&self) -> Result<()> {
        if self.tracking_number.trim().is_empty() {
            return Err(Error::InvalidInput(
                "tracking_number must not be empty".to_string(),
            ));
        }

        for (field, value) in [
            ("origin_country_iso3", &self.origin_country_iso3),
            ("destination_country_iso3", &self.destination_country_iso3),
        ] {
            if let Some(code) = value
                && !is_iso3(code)
            {
                return Err(Error::InvalidInput(format!(
                    "{} must be a 3-letter country code, got {:?}",
                    field, code
                )));
            }
        }

        Ok(())
    }
}

fn is_iso3(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Rebuilds the caller-supplied part of an existing tracking.
impl From<&Tracking> for CreateTracking {
    fn from(tracking: &Tracking) -> Self {
        Self {
            tracking_number: tracking.tracking_number.clone(),
            slug: tracking.slug.clone(),
            tracking_postal_code: tracking.tracking_postal_code.clone(),
            tracking_ship_date: tracking.tracking_ship_date.clone(),
            tracking_account_number: tracking.tracking_account_number.clone(),
            tracking_key: tracking.tracking_key.clone(),
            tracking_origin_country: tracking.tracking_origin_country.clone(),
            tracking_destination_country: tracking.tracking_destination_country.clone(),
            tracking_state: tracking.tracking_state.clone(),
            android: tracking.android.clone(),
            ios: tracking.ios.clone(),
            emails: tracking.emails.clone(),
            smses: tracking.smses.clone(),
            title: tracking.title.clone(),
            customer_name: tracking.customer_name.clone(),
            origin_country_iso3: tracking.origin_country_iso3.clone(),
            destination_country_iso3: tracking.destination_country_iso3.clone(),
            order_id: tracking.order_id.clone(),
            order_id_path: tracking.order_id_path.clone(),
            custom_fields: tracking.custom_fields.clone(),
            note: tracking.note.clone(),
            language: tracking.language.clone(),
            order_promised_delivery_date: tracking.order_promised_delivery_date.clone(),
            delivery_type: tracking.delivery_type.clone(),
            pickup_location: tracking.pickup_location.clone(),
            pickup_note: tracking.pickup_note.clone(),
        }
    }
}
