use crate::model::{Operator, Product, Property, PropertyId};
use anyhow::Result;

/// Read-only access to the catalog dataset.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// All properties, in dataset order
    async fn get_properties(&self) -> Result<Vec<Property>>;
    /// All operators, in dataset order
    async fn get_operators(&self) -> Result<Vec<Operator>>;
    /// All products, in dataset order
    async fn get_products(&self) -> Result<Vec<Product>>;

    async fn get_property(&self, id: PropertyId) -> Result<Option<Property>> {
        Ok(self
            .get_properties()
            .await?
            .into_iter()
            .find(|p| p.id == id))
    }
}

pub trait Store: CatalogStore + Send + Sync {}
impl<T: CatalogStore> Store for T {}
