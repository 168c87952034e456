use async_trait::async_trait;

use crate::query_hydrator::QueryHydrator;
use crate::types::{CatalogQuery, PriceBand};

/// Derives the price window from the reference price when the caller did
/// not set one explicitly. The default spread matches the dashboard's
/// "similar products" window of 80%-120% of the analyzed price.
pub struct PriceBandQueryHydrator {
    pub spread: f64,
}

impl Default for PriceBandQueryHydrator {
    fn default() -> Self {
        Self { spread: 0.2 }
    }
}

#[async_trait]
impl QueryHydrator<CatalogQuery> for PriceBandQueryHydrator {
    fn enable(&self, query: &CatalogQuery) -> bool {
        query.price_band.is_none() && query.reference_price.is_some()
    }

    async fn hydrate(&self, query: &CatalogQuery) -> Result<CatalogQuery, String> {
        let reference = query
            .reference_price
            .ok_or_else(|| "no reference price to derive a band from".to_string())?;
        Ok(CatalogQuery {
            price_band: Some(PriceBand::around(reference, self.spread)),
            ..query.clone()
        })
    }

    fn update(&self, query: &mut CatalogQuery, hydrated: CatalogQuery) {
        query.price_band = hydrated.price_band;
    }
}
