use async_trait::async_trait;

use crate::filter::{Filter, FilterResult};
use crate::types::{CatalogQuery, ProductCandidate};

/// Removes products with nothing on hand, unless the query explicitly asks
/// to keep them.
pub struct InStockFilter;

#[async_trait]
impl Filter<CatalogQuery, ProductCandidate> for InStockFilter {
    fn enable(&self, query: &CatalogQuery) -> bool {
        !query.include_out_of_stock
    }

    async fn filter(
        &self,
        _query: &CatalogQuery,
        candidates: Vec<ProductCandidate>,
    ) -> Result<FilterResult<ProductCandidate>, String> {
        let (kept, removed): (Vec<_>, Vec<_>) =
            candidates.into_iter().partition(|c| c.quantity > 0);

        Ok(FilterResult { kept, removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candidate(quantity: i64) -> ProductCandidate {
        ProductCandidate {
            quantity,
            ..ProductCandidate::default()
        }
    }

    #[tokio::test]
    async fn removes_zero_and_negative_quantities() {
        let filter = InStockFilter;
        let query = CatalogQuery::similar_to("test-001", 10_000.0);
        let candidates = vec![make_candidate(5), make_candidate(0), make_candidate(-2)];

        let FilterResult { kept, removed } = filter.filter(&query, candidates).await.unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(removed.len(), 2);
    }

    #[test]
    fn disabled_when_query_includes_out_of_stock() {
        let filter = InStockFilter;
        let query = CatalogQuery {
            include_out_of_stock: true,
            ..CatalogQuery::similar_to("test-002", 10_000.0)
        };
        assert!(!Filter::enable(&filter, &query));
    }
}
