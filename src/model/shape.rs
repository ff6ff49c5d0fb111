//! Fields whose JSON shape varies between requests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single string or a list of strings.
///
/// Used for `slug` (one carrier, or candidate carriers for auto-detection),
/// `emails` and `smses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    /// `None` for no values, `One` for a single value, `Many` otherwise.
    pub fn from_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(StringOrList::One),
            _ => Some(StringOrList::Many(values)),
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            StringOrList::One(value) => vec![value.as_str()],
            StringOrList::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// The only value, or the first of several.
    pub fn first(&self) -> Option<&str> {
        self.values().into_iter().next()
    }
}

impl From<&str> for StringOrList {
    fn from(value: &str) -> Self {
        StringOrList::One(value.to_string())
    }
}

impl From<String> for StringOrList {
    fn from(value: String) -> Self {
        StringOrList::One(value)
    }
}

impl From<Vec<String>> for StringOrList {
    fn from(values: Vec<String>) -> Self {
        StringOrList::Many(values)
    }
}

/// Push notification target for `android` / `ios`: a device token, a list of
/// tokens, or a structured object whose keys are defined by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PushTarget {
    Token(String),
    Tokens(Vec<String>),
    Object(Map<String, Value>),
}
