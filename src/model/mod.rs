//! Tracking resource types.
//!
//! - `enums` - Open string-backed enumerations (`Tag`, `DeliveryType`)
//! - `shape` - Fields with more than one accepted JSON shape
//! - `tracking` - `Tracking` and `Checkpoint` as returned by the service
//! - `create` - `CreateTracking` request payload

mod create;
mod enums;
mod shape;
mod tracking;

use serde::{Deserialize, Deserializer};

pub use create::CreateTracking;
pub use enums::{DeliveryType, Tag};
pub use shape::{PushTarget, StringOrList};
pub use tracking::{Checkpoint, Tracking};

/// Decodes `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
