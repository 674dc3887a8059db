use itertools::Itertools;

use crate::logic::numeric::{parse_leading_number, parse_number};
use crate::model::{OperatorId, Product, Property, PropertyValue, StoredValue};

/// A resolved (property, operator, search) triple ready for evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub property: Option<Property>,
    pub operator: Option<String>,
    pub search: Option<String>,
}

impl ProductQuery {
    pub fn new(property: Option<Property>, operator: Option<&str>, search: Option<&str>) -> Self {
        Self {
            property,
            operator: operator.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    /// Search text, with an empty string counting as no search.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    pub fn operator_id(&self) -> Option<OperatorId> {
        self.operator.as_deref().and_then(|op| op.parse().ok())
    }

    /// True when the inputs are not complete enough to filter: no property
    /// selected, or a search-driven operator with nothing typed yet.
    pub fn is_pass_through(&self) -> bool {
        if self.property.is_none() {
            return true;
        }
        let existence_check = self
            .operator_id()
            .map(|op| op.is_existence_check())
            .unwrap_or(false);
        !existence_check && self.search_text().is_none()
    }
}

pub struct ProductFilterEvaluator;

impl ProductFilterEvaluator {
    /// Keep the products matching the query, preserving their order
    pub fn filter_products(products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
        let Some(property) = query.property.as_ref().filter(|_| !query.is_pass_through()) else {
            return products;
        };

        products
            .into_iter()
            .filter(|product| Self::matches(product, property, query))
            .collect()
    }

    /// Evaluate the query predicate against a single product
    pub fn matches(product: &Product, property: &Property, query: &ProductQuery) -> bool {
        let Some(operator) = query.operator_id() else {
            return true;
        };

        let entry: Option<&PropertyValue> = product.entry_for(property.id);
        let value: Option<&StoredValue> = entry.and_then(|pv| pv.value.as_ref());
        let search = query.search_text().unwrap_or_default();

        match operator {
            OperatorId::Equals => match value {
                Some(StoredValue::Number(n)) => match (n.as_f64(), parse_number(search)) {
                    (Some(stored), Some(wanted)) => stored == wanted,
                    _ => false,
                },
                Some(StoredValue::Text(text)) => text == search,
                None => false,
            },

            OperatorId::GreaterThan => Self::compare_numeric(value, search, |a, b| a > b),

            OperatorId::LessThan => Self::compare_numeric(value, search, |a, b| a < b),

            OperatorId::Contains => match value.and_then(StoredValue::as_text) {
                Some(text) => text.to_lowercase().contains(&search.to_lowercase()),
                None => false,
            },

            // Entry existence only; a valueless entry still counts as present
            OperatorId::Any => entry.is_some(),

            OperatorId::None => entry.is_none(),

            OperatorId::In => match value {
                Some(stored) => {
                    let token = stored.to_token();
                    search_tokens(search).any(|candidate| candidate == token)
                }
                None => false,
            },
        }
    }

    fn compare_numeric<F>(value: Option<&StoredValue>, search: &str, cmp: F) -> bool
    where
        F: Fn(f64, f64) -> bool,
    {
        match (value.and_then(StoredValue::as_f64), parse_leading_number(search)) {
            (Some(stored), Some(bound)) => cmp(stored, bound),
            _ => false,
        }
    }
}

/// Split a comma-separated search into trimmed tokens.
pub fn search_tokens(search: &str) -> impl Iterator<Item = &str> {
    search.split(',').map(str::trim)
}

/// Filter products using a resolved query.
/// This is the primary API for product filtering.
pub fn filter_products(products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    let before = products.len();
    let filtered = ProductFilterEvaluator::filter_products(products, query);
    log::debug!(
        "Filtered products with operator={:?} search={:?}: {} of {} kept (ids: {})",
        query.operator,
        query.search,
        filtered.len(),
        before,
        filtered.iter().map(|p| p.id).join(",")
    );
    filtered
}
