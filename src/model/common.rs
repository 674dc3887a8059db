use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type PropertyId = i64;
pub type ProductId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Enumerated,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::String,
        PropertyType::Number,
        PropertyType::Enumerated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Enumerated => "enumerated",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid propertyType. Must be 'string', 'number', or 'enumerated'")]
pub struct InvalidPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = InvalidPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InvalidPropertyType(s.to_string()))
    }
}

/// Identifier of a comparison or existence predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperatorId {
    Equals,
    GreaterThan,
    LessThan,
    Any,
    None,
    In,
    Contains,
}

impl OperatorId {
    pub const ALL: [OperatorId; 7] = [
        OperatorId::Equals,
        OperatorId::GreaterThan,
        OperatorId::LessThan,
        OperatorId::Any,
        OperatorId::None,
        OperatorId::In,
        OperatorId::Contains,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorId::Equals => "equals",
            OperatorId::GreaterThan => "greater_than",
            OperatorId::LessThan => "less_than",
            OperatorId::Any => "any",
            OperatorId::None => "none",
            OperatorId::In => "in",
            OperatorId::Contains => "contains",
        }
    }

    /// Existence operators filter without a search value.
    pub fn is_existence_check(&self) -> bool {
        matches!(self, OperatorId::Any | OperatorId::None)
    }
}

impl fmt::Display for OperatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("operator '{0}' is not valid")]
pub struct UnknownOperator(pub String);

impl FromStr for OperatorId {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperatorId::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_parsing() {
        assert_eq!("number".parse::<PropertyType>(), Ok(PropertyType::Number));
        assert_eq!(
            "enumerated".parse::<PropertyType>(),
            Ok(PropertyType::Enumerated)
        );

        let err = "boolean".parse::<PropertyType>().unwrap_err();
        assert!(err.to_string().starts_with("Invalid propertyType"));
        // Case matters on the wire
        assert!("String".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_operator_id_wire_names() {
        for op in OperatorId::ALL {
            let json = serde_json::to_value(op).unwrap();
            assert_eq!(json, serde_json::Value::String(op.to_string()));
            assert_eq!(op.as_str().parse::<OperatorId>(), Ok(op));
        }
        assert!("not_in".parse::<OperatorId>().is_err());
    }
}
