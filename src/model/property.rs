use serde::{Deserialize, Serialize};

use crate::model::{PropertyId, PropertyType};

/// A named, typed attribute that products may carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Allowed values, only meaningful for enumerated properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Property {
    pub fn new(id: PropertyId, name: &str, property_type: PropertyType) -> Self {
        Self {
            id,
            name: name.to_string(),
            property_type,
            values: None,
        }
    }

    pub fn enumerated(id: PropertyId, name: &str, values: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            property_type: PropertyType::Enumerated,
            values: Some(values.iter().map(|v| v.to_string()).collect()),
        }
    }
}
