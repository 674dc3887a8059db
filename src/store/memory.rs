use anyhow::Result;
use std::sync::Arc;

use crate::model::{Operator, Product, Property, PropertyId};
use crate::store::traits::CatalogStore;
use crate::store::Catalog;

/// In-memory store over an immutable catalog snapshot.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    catalog: Arc<Catalog>,
}

impl MemoryStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

#[async_trait::async_trait]
impl CatalogStore for MemoryStore {
    async fn get_properties(&self) -> Result<Vec<Property>> {
        Ok(self.catalog.properties().to_vec())
    }

    async fn get_operators(&self) -> Result<Vec<Operator>> {
        Ok(self.catalog.operators().to_vec())
    }

    async fn get_products(&self) -> Result<Vec<Product>> {
        Ok(self.catalog.products().to_vec())
    }

    async fn get_property(&self, id: PropertyId) -> Result<Option<Property>> {
        Ok(self.catalog.property(id).cloned())
    }
}
