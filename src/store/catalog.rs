use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::model::{Operator, OperatorId, Product, ProductId, Property, PropertyId, PropertyType};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate property id {0}")]
    DuplicatePropertyId(PropertyId),
    #[error("duplicate product id {0}")]
    DuplicateProductId(ProductId),
    #[error("duplicate operator id '{0}'")]
    DuplicateOperatorId(OperatorId),
    #[error("operator '{0}' is missing from the operator list")]
    MissingOperator(OperatorId),
    #[error("property {0} declares values but is of type '{1}'")]
    UnexpectedValues(PropertyId, PropertyType),
}

/// Immutable snapshot of properties, operators and products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    properties: Vec<Property>,
    operators: Vec<Operator>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(
        properties: Vec<Property>,
        operators: Vec<Operator>,
        products: Vec<Product>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            properties,
            operators,
            products,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn property(&self, id: PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if let Some(id) = self.properties.iter().map(|p| p.id).duplicates().next() {
            return Err(CatalogError::DuplicatePropertyId(id));
        }
        if let Some(id) = self.products.iter().map(|p| p.id).duplicates().next() {
            return Err(CatalogError::DuplicateProductId(id));
        }
        if let Some(id) = self.operators.iter().map(|o| o.id).duplicates().next() {
            return Err(CatalogError::DuplicateOperatorId(id));
        }

        // Every operator named by the compatibility table must be listed
        if let Some(missing) = OperatorId::ALL
            .into_iter()
            .find(|id| !self.operators.iter().any(|o| o.id == *id))
        {
            return Err(CatalogError::MissingOperator(missing));
        }

        if let Some(property) = self
            .properties
            .iter()
            .find(|p| p.values.is_some() && p.property_type != PropertyType::Enumerated)
        {
            return Err(CatalogError::UnexpectedValues(
                property.id,
                property.property_type,
            ));
        }

        let known: HashSet<PropertyId> = self.properties.iter().map(|p| p.id).collect();
        for product in &self.products {
            for pv in product
                .property_values
                .iter()
                .filter(|pv| !known.contains(&pv.property_id))
            {
                log::warn!(
                    "Product {} references unknown property {}",
                    product.id,
                    pv.property_id
                );
            }
        }

        Ok(())
    }
}
