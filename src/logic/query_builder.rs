use serde::{Deserialize, Serialize};

use crate::logic::request_validation::QueryParams;

/// Selection state of the product search form, turned into the query string
/// sent to `/products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryParams {
    pub property_id: Option<String>,
    pub operator: Option<String>,
    pub search: Option<String>,
}

impl ProductQueryParams {
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            property_id: params.first("propertyId").map(str::to_string),
            operator: params.first("operator").map(str::to_string),
            search: params.first("search").map(str::to_string),
        }
    }

    /// Encoded query string. `propertyId` is only sent together with an
    /// operator; parameter order is fixed.
    pub fn to_query_string(&self) -> String {
        let operator = present(&self.operator);
        let property_id = present(&self.property_id).filter(|_| operator.is_some());

        [
            ("propertyId", property_id),
            ("operator", operator),
            ("search", present(&self.search)),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| format!("{}={}", name, urlencoding::encode(v))))
        .collect::<Vec<_>>()
        .join("&")
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
