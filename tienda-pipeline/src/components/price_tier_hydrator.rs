use async_trait::async_trait;

use tienda_core::TierTable;

use crate::hydrator::Hydrator;
use crate::types::{CatalogQuery, ProductCandidate};

/// Attaches the pricing engine's tier classification to each candidate, so
/// the presentation layer can show which discount band applies to a
/// comparable product.
pub struct PriceTierHydrator {
    pub tiers: TierTable,
}

impl Default for PriceTierHydrator {
    fn default() -> Self {
        Self {
            tiers: TierTable::default(),
        }
    }
}

#[async_trait]
impl Hydrator<CatalogQuery, ProductCandidate> for PriceTierHydrator {
    async fn hydrate(
        &self,
        _query: &CatalogQuery,
        candidates: &[ProductCandidate],
    ) -> Result<Vec<ProductCandidate>, String> {
        let hydrated = candidates
            .iter()
            .map(|c| ProductCandidate {
                tier: Some(self.tiers.classify(c.price).0),
                ..ProductCandidate::default()
            })
            .collect();
        Ok(hydrated)
    }

    fn update(&self, candidate: &mut ProductCandidate, hydrated: ProductCandidate) {
        candidate.tier = hydrated.tier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tienda_core::PriceTier;

    #[tokio::test]
    async fn attaches_the_engine_tier() {
        let hydrator = PriceTierHydrator::default();
        let query = CatalogQuery::similar_to("test-001", 10_000.0);
        let candidates = vec![
            ProductCandidate {
                price: 8_000.0,
                ..ProductCandidate::default()
            },
            ProductCandidate {
                price: 55_000.0,
                ..ProductCandidate::default()
            },
            ProductCandidate {
                price: 120_000.0,
                ..ProductCandidate::default()
            },
        ];

        let hydrated = hydrator.hydrate(&query, &candidates).await.unwrap();
        assert_eq!(hydrated[0].tier, Some(PriceTier::Small));
        assert_eq!(hydrated[1].tier, Some(PriceTier::Medium));
        assert_eq!(hydrated[2].tier, Some(PriceTier::Large));
    }
}
