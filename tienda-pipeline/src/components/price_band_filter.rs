use async_trait::async_trait;

use crate::filter::{Filter, FilterResult};
use crate::types::{CatalogQuery, ProductCandidate};

/// Keeps candidates whose price falls inside the query's price window.
/// Skipped when the query carries no window.
pub struct PriceBandFilter;

#[async_trait]
impl Filter<CatalogQuery, ProductCandidate> for PriceBandFilter {
    fn enable(&self, query: &CatalogQuery) -> bool {
        query.price_band.is_some()
    }

    async fn filter(
        &self,
        query: &CatalogQuery,
        candidates: Vec<ProductCandidate>,
    ) -> Result<FilterResult<ProductCandidate>, String> {
        let band = query
            .price_band
            .ok_or_else(|| "price band filter ran without a band".to_string())?;

        let (kept, removed): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|c| band.contains(c.price));

        Ok(FilterResult { kept, removed })
    }
}
