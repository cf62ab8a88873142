use super::{decode_catalog, CatalogSource, CatalogSourceError};
use crate::model::VariantRecord;
use async_trait::async_trait;

/// The built-in catalog, in the same envelope shape the list endpoint returns.
pub const FIXTURE_JSON: &str = include_str!("fixtures/variants.json");

/// In-memory catalog source.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    records: Vec<VariantRecord>,
}

impl StaticCatalogSource {
    pub fn new(records: Vec<VariantRecord>) -> Self {
        Self { records }
    }

    /// The five diaper-vendo variants of product 1023.
    pub fn fixture() -> Result<Self, CatalogSourceError> {
        Ok(Self::new(decode_catalog(FIXTURE_JSON.as_bytes())?))
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn list(&self) -> Result<Vec<VariantRecord>, CatalogSourceError> {
        Ok(self.records.clone())
    }
}
