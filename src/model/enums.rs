//! Open string-backed enumerations.
//!
//! The service owns these value sets and may add to them at any time, so each
//! type wraps a string and exposes the known values as constants. Unknown
//! values decode and re-encode unchanged.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$variant_meta:meta])* $constant:ident => $value:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$variant_meta])*
                pub const $constant: $name = $name(Cow::Borrowed($value));
            )+

            /// All values known to this version of the crate.
            pub const KNOWN: &'static [$name] = &[$($name::$constant),+];

            pub fn new(value: impl Into<String>) -> Self {
                Self(Cow::Owned(value.into()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_known(&self) -> bool {
                Self::KNOWN.contains(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

string_enum! {
    /// How the shipment reaches the customer.
    DeliveryType {
        PICKUP_AT_STORE => "pickup_at_store",
        PICKUP_AT_COURIER => "pickup_at_courier",
        DOOR_TO_DOOR => "door_to_door",
    }
}

string_enum! {
    /// Delivery status of a tracking or checkpoint.
    Tag {
        /// No information yet, or the carrier has not picked the shipment up.
        PENDING => "Pending",
        INFO_RECEIVED => "InfoReceived",
        IN_TRANSIT => "InTransit",
        OUT_FOR_DELIVERY => "OutForDelivery",
        ATTEMPT_FAIL => "AttemptFail",
        DELIVERED => "Delivered",
        EXCEPTION => "Exception",
        /// No update for 30 days (domestic) or 60 days (international).
        EXPIRED => "Expired",
    }
}

impl Tag {
    /// No further checkpoints are expected.
    pub fn is_final(&self) -> bool {
        *self == Tag::DELIVERED || *self == Tag::EXPIRED
    }
}
