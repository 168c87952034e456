use async_trait::async_trait;

use crate::scorer::Scorer;
use crate::types::{CatalogQuery, ProductCandidate, StockLevel};

/// Ranks candidates by how close their price sits to the reference price,
/// attenuated when the product is scarce or gone. The base score is
/// `1 / (1 + |price - reference| / reference)`: 1.0 at the reference price,
/// falling toward 0 as the gap grows.
pub struct PriceProximityScorer;

/// Attenuation for products with thin stock.
const LOW_STOCK_MULTIPLIER: f64 = 0.8;
/// Attenuation for products with nothing on hand.
const OUT_OF_STOCK_MULTIPLIER: f64 = 0.5;

#[async_trait]
impl Scorer<CatalogQuery, ProductCandidate> for PriceProximityScorer {
    fn enable(&self, query: &CatalogQuery) -> bool {
        query.reference_price.is_some()
    }

    async fn score(
        &self,
        query: &CatalogQuery,
        candidates: &[ProductCandidate],
    ) -> Result<Vec<ProductCandidate>, String> {
        let reference = query
            .reference_price
            .ok_or_else(|| "proximity scorer ran without a reference price".to_string())?;
        if reference <= 0.0 {
            return Err(format!("reference price must be positive, got {reference}"));
        }

        let scored = candidates
            .iter()
            .map(|c| {
                let base = 1.0 / (1.0 + (c.price - reference).abs() / reference);
                let stock_multiplier = match c.stock_level {
                    Some(StockLevel::OutOfStock) => OUT_OF_STOCK_MULTIPLIER,
                    Some(StockLevel::Low) => LOW_STOCK_MULTIPLIER,
                    Some(StockLevel::Ok) | None => 1.0,
                };

                ProductCandidate {
                    relevance_score: Some(base * stock_multiplier),
                    ..ProductCandidate::default()
                }
            })
            .collect();

        Ok(scored)
    }

    fn update(&self, candidate: &mut ProductCandidate, scored: ProductCandidate) {
        candidate.relevance_score = scored.relevance_score;
    }
}
