use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::numeric::leading_integer;
use crate::logic::operator_table::is_operator_valid;
use crate::logic::product_filter::ProductQuery;
use crate::model::{InvalidPropertyType, Operator, Property, PropertyId, PropertyType};

/// Broad classes of request rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestErrorKind {
    MethodNotAllowed,
    MalformedParameter,
    UnknownReference,
    IncompatibleCombination,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error(transparent)]
    InvalidPropertyType(#[from] InvalidPropertyType),
    #[error("propertyId must be a valid number")]
    MalformedPropertyId(String),
    #[error("propertyId {0} does not exist in properties")]
    UnknownProperty(String),
    #[error("operator must be a string")]
    OperatorNotString,
    #[error("operator '{0}' is not valid")]
    UnknownOperator(String),
    #[error("operator '{operator}' and '{property_type}' combination is not valid")]
    IncompatibleOperator {
        operator: String,
        property_type: PropertyType,
    },
}

impl RequestError {
    pub fn kind(&self) -> RequestErrorKind {
        match self {
            RequestError::MethodNotAllowed => RequestErrorKind::MethodNotAllowed,
            RequestError::InvalidPropertyType(_)
            | RequestError::MalformedPropertyId(_)
            | RequestError::OperatorNotString => RequestErrorKind::MalformedParameter,
            RequestError::UnknownProperty(_) | RequestError::UnknownOperator(_) => {
                RequestErrorKind::UnknownReference
            }
            RequestError::IncompatibleOperator { .. } => RequestErrorKind::IncompatibleCombination,
        }
    }
}

/// Raw query string pairs, in the order they were sent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn all(&self, name: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// First value for `name`; an empty value counts as absent.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }
}

/// Validate the `type` parameter of an operator listing request.
pub fn validate_operator_type(params: &QueryParams) -> Result<Option<PropertyType>, RequestError> {
    match params.first("type") {
        Some(raw) => Ok(Some(raw.parse::<PropertyType>()?)),
        None => Ok(None),
    }
}

/// Check product query parameters against the catalog and resolve them into
/// a query the filter engine can run. Checks run in a fixed order and the
/// first failure is returned.
pub fn validate_product_query(
    params: &QueryParams,
    properties: &[Property],
    operators: &[Operator],
) -> Result<ProductQuery, RequestError> {
    let property = match params.first("propertyId") {
        Some(raw) => {
            let digits = leading_integer(raw)
                .ok_or_else(|| RequestError::MalformedPropertyId(raw.to_string()))?;
            // Ids too large for a PropertyId cannot name a property
            let id = digits.parse::<PropertyId>().ok();
            let property = id
                .and_then(|id| properties.iter().find(|p| p.id == id))
                .ok_or_else(|| {
                    RequestError::UnknownProperty(match id {
                        Some(id) => id.to_string(),
                        None => digits.trim_start_matches('+').to_string(),
                    })
                })?;
            Some(property.clone())
        }
        None => None,
    };

    let operator = match params.all("operator").as_slice() {
        [] => None,
        [single] if single.is_empty() => None,
        [single] => {
            if !operators.iter().any(|op| op.id.as_str() == *single) {
                return Err(RequestError::UnknownOperator(single.to_string()));
            }
            Some(*single)
        }
        _ => return Err(RequestError::OperatorNotString),
    };

    if let (Some(property), Some(operator)) = (&property, operator) {
        if !is_operator_valid(operators, Some(property.property_type), operator) {
            return Err(RequestError::IncompatibleOperator {
                operator: operator.to_string(),
                property_type: property.property_type,
            });
        }
    }

    Ok(ProductQuery::new(property, operator, params.first("search")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn validate(pairs: &[(&str, &str)]) -> Result<ProductQuery, RequestError> {
        validate_product_query(
            &QueryParams::new(pairs.iter().copied()),
            &seed::properties(),
            &seed::operators(),
        )
    }

    #[test]
    fn test_empty_query_is_valid() {
        let query = validate(&[]).unwrap();
        assert_eq!(query, ProductQuery::default());
    }

    #[test]
    fn test_resolves_property_operator_and_search() {
        let query = validate(&[("propertyId", "2"), ("operator", "greater_than"), ("search", "4")])
            .unwrap();
        assert_eq!(query.property.unwrap().name, "weight (oz)");
        assert_eq!(query.operator.as_deref(), Some("greater_than"));
        assert_eq!(query.search.as_deref(), Some("4"));
    }

    #[test]
    fn test_malformed_property_id() {
        let err = validate(&[("propertyId", "abc")]).unwrap_err();
        assert_eq!(err, RequestError::MalformedPropertyId("abc".to_string()));
        assert_eq!(err.kind(), RequestErrorKind::MalformedParameter);
        assert_eq!(err.to_string(), "propertyId must be a valid number");
    }

    #[test]
    fn test_property_id_reads_leading_integer() {
        let query = validate(&[("propertyId", "3abc")]).unwrap();
        assert_eq!(query.property.map(|p| p.id), Some(3));
    }

    #[test]
    fn test_unknown_property() {
        let err = validate(&[("propertyId", "999")]).unwrap_err();
        assert_eq!(err, RequestError::UnknownProperty("999".to_string()));
        assert_eq!(err.kind(), RequestErrorKind::UnknownReference);
        assert_eq!(err.to_string(), "propertyId 999 does not exist in properties");
    }

    #[test]
    fn test_oversized_property_id_is_unknown() {
        let err = validate(&[("propertyId", "99999999999999999999")]).unwrap_err();
        assert_eq!(err.kind(), RequestErrorKind::UnknownReference);
        assert_eq!(
            err.to_string(),
            "propertyId 99999999999999999999 does not exist in properties"
        );
    }

    #[test]
    fn test_repeated_operator_is_rejected() {
        let err = validate(&[("operator", "equals"), ("operator", "equals")]).unwrap_err();
        assert_eq!(err, RequestError::OperatorNotString);
    }

    #[test]
    fn test_unknown_operator() {
        let err = validate(&[("operator", "invalid")]).unwrap_err();
        assert_eq!(err.to_string(), "operator 'invalid' is not valid");
        assert_eq!(err.kind(), RequestErrorKind::UnknownReference);
    }

    #[test]
    fn test_incompatible_combination() {
        let err = validate(&[("propertyId", "2"), ("operator", "contains"), ("search", "5")])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "operator 'contains' and 'number' combination is not valid"
        );
        assert_eq!(err.kind(), RequestErrorKind::IncompatibleCombination);
    }

    #[test]
    fn test_checks_run_in_order() {
        // Property problems are reported before operator problems
        let err = validate(&[("propertyId", "999"), ("operator", "invalid")]).unwrap_err();
        assert_eq!(err, RequestError::UnknownProperty("999".to_string()));

        let err = validate(&[("propertyId", "abc"), ("operator", "invalid")]).unwrap_err();
        assert_eq!(err.kind(), RequestErrorKind::MalformedParameter);
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let query = validate(&[("propertyId", ""), ("operator", ""), ("search", "")]).unwrap();
        assert_eq!(query, ProductQuery::default());
    }

    #[test]
    fn test_property_without_operator_is_accepted() {
        let query = validate(&[("propertyId", "0")]).unwrap();
        assert!(query.property.is_some());
        assert!(query.operator.is_none());
    }

    #[test]
    fn test_validate_operator_type() {
        let params = QueryParams::new([("type", "number")]);
        assert_eq!(validate_operator_type(&params), Ok(Some(PropertyType::Number)));

        assert_eq!(validate_operator_type(&QueryParams::default()), Ok(None));

        let err = validate_operator_type(&QueryParams::new([("type", "boolean")])).unwrap_err();
        assert!(err.to_string().starts_with("Invalid propertyType"));
        assert_eq!(err.kind(), RequestErrorKind::MalformedParameter);
    }
}
