use async_trait::async_trait;

use crate::catalog_loader::ProductRecord;
use crate::source::Source;
use crate::types::{CatalogQuery, ProductCandidate};

/// Source that produces one candidate per catalog record.
///
/// Narrowing (search terms, price bands, stock) is left to the filter
/// stages so every query sees the same candidate universe.
pub struct CatalogSource {
    records: Vec<ProductRecord>,
}

impl CatalogSource {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl Source<CatalogQuery, ProductCandidate> for CatalogSource {
    fn enable(&self, _query: &CatalogQuery) -> bool {
        !self.records.is_empty()
    }

    async fn get_candidates(&self, _query: &CatalogQuery) -> Result<Vec<ProductCandidate>, String> {
        Ok(self.records.iter().map(|r| r.to_candidate()).collect())
    }
}
