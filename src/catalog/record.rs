//! Service record model
//!
//! Wire representation of a single entry returned by the remote catalog.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Grouping key used for records that carry no usable category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Identifier of a service record
///
/// Integral numbers become [`ServiceId::Number`]; any other scalar (strings,
/// fractional or out-of-range numbers, booleans) is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ServiceId {
    /// Numeric identifier (e.g. `1`)
    Number(i64),
    /// Any other scalar identifier (e.g. `"latte-m"`, `1.5`)
    Text(String),
}

impl<'de> Deserialize<'de> for ServiceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(n
                .as_i64()
                .map(ServiceId::Number)
                .unwrap_or_else(|| ServiceId::Text(n.to_string()))),
            Value::String(s) => Ok(ServiceId::Text(s)),
            Value::Bool(b) => Ok(ServiceId::Text(b.to_string())),
            other => Err(de::Error::custom(format!(
                "service id must be a scalar, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceId::Number(n) => write!(f, "{}", n),
            ServiceId::Text(s) => f.write_str(s),
        }
    }
}

/// Text for a scalar JSON value; objects, arrays, null and blank strings have none
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accept a string or other scalar as the category; anything else counts as absent
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(other) => scalar_text(&other),
        None => None,
    })
}

/// A single service offered by the catalog
///
/// Only `id` and `category` are interpreted. Display fields are kept as raw
/// JSON and turned into text only when rendered, so an unexpected shape never
/// rejects the record. Fields not modelled here are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique identifier
    pub id: ServiceId,
    /// Category key (may be absent or null on the wire)
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<Value>,
    /// Long description shown in the detail modal
    #[serde(default)]
    pub description: Option<Value>,
    /// Price, either a number or a preformatted string
    #[serde(default)]
    pub price: Option<Value>,
    /// Image URL
    #[serde(default)]
    pub image: Option<Value>,
    /// Remaining fields, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceRecord {
    /// Create a record with only an id and a category
    pub fn new(id: impl Into<ServiceId>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: Some(category.into()),
            name: None,
            description: None,
            price: None,
            image: None,
            extra: Map::new(),
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Value::String(name.into()));
        self
    }

    /// Category this record is grouped under
    ///
    /// Absent, null and blank categories all map to [`UNCATEGORIZED`].
    pub fn category_key(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category,
            _ => UNCATEGORIZED,
        }
    }

    /// Name to show on cards, falling back to the id
    pub fn display_name(&self) -> String {
        self.name
            .as_ref()
            .and_then(scalar_text)
            .unwrap_or_else(|| format!("Service {}", self.id))
    }

    /// Description as text, if it is a scalar
    pub fn description_text(&self) -> Option<String> {
        self.description.as_ref().and_then(scalar_text)
    }

    /// Image URL, if it is a string
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(Value::as_str)
            .filter(|url| !url.trim().is_empty())
    }

    /// Price formatted for display, if the record has one
    pub fn price_label(&self) -> Option<String> {
        match self.price.as_ref()? {
            Value::Bool(_) => None,
            other => scalar_text(other),
        }
    }
}

impl From<i64> for ServiceId {
    fn from(id: i64) -> Self {
        ServiceId::Number(id)
    }
}

impl From<i32> for ServiceId {
    fn from(id: i32) -> Self {
        ServiceId::Number(i64::from(id))
    }
}

impl From<&str> for ServiceId {
    fn from(id: &str) -> Self {
        ServiceId::Text(id.to_string())
    }
}

impl From<String> for ServiceId {
    fn from(id: String) -> Self {
        ServiceId::Text(id)
    }
}
