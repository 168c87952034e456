use async_trait::async_trait;

use crate::hydrator::Hydrator;
use crate::summary::LOW_STOCK_THRESHOLD;
use crate::types::{CatalogQuery, ProductCandidate, StockLevel};

/// Classifies each candidate's on-hand quantity into a `StockLevel`.
pub struct StockLevelHydrator {
    pub low_threshold: i64,
}

impl Default for StockLevelHydrator {
    fn default() -> Self {
        Self {
            low_threshold: LOW_STOCK_THRESHOLD,
        }
    }
}

#[async_trait]
impl Hydrator<CatalogQuery, ProductCandidate> for StockLevelHydrator {
    async fn hydrate(
        &self,
        _query: &CatalogQuery,
        candidates: &[ProductCandidate],
    ) -> Result<Vec<ProductCandidate>, String> {
        let hydrated = candidates
            .iter()
            .map(|c| ProductCandidate {
                stock_level: Some(StockLevel::classify(c.quantity, self.low_threshold)),
                ..ProductCandidate::default()
            })
            .collect();
        Ok(hydrated)
    }

    fn update(&self, candidate: &mut ProductCandidate, hydrated: ProductCandidate) {
        candidate.stock_level = hydrated.stock_level;
    }
}
