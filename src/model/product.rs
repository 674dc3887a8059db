use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::model::{ProductId, PropertyId};

/// A stored property value. Numbers keep their JSON representation so that
/// integer values round-trip without a trailing `.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Number(Number),
    Text(String),
}

impl StoredValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StoredValue::Number(n) => n.as_f64(),
            StoredValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoredValue::Text(s) => Some(s),
            StoredValue::Number(_) => None,
        }
    }

    /// Textual form used when comparing against search tokens. Whole
    /// numbers print without a fraction, so `5.0` and `1e2` read as `5` and
    /// `100`.
    pub fn to_token(&self) -> String {
        match self {
            StoredValue::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
            StoredValue::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    (f as i64).to_string()
                }
                Some(f) => f.to_string(),
                None => n.to_string(),
            },
            StoredValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        StoredValue::Text(value.to_string())
    }
}

impl From<i64> for StoredValue {
    fn from(value: i64) -> Self {
        StoredValue::Number(Number::from(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    pub property_id: PropertyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<StoredValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub property_values: Vec<PropertyValue>,
}

impl Product {
    pub fn new(id: ProductId, values: Vec<(PropertyId, StoredValue)>) -> Self {
        Self {
            id,
            property_values: values
                .into_iter()
                .map(|(property_id, value)| PropertyValue {
                    property_id,
                    value: Some(value),
                })
                .collect(),
        }
    }

    /// First entry recorded for the property, if any.
    pub fn entry_for(&self, property_id: PropertyId) -> Option<&PropertyValue> {
        self.property_values
            .iter()
            .find(|pv| pv.property_id == property_id)
    }
}
