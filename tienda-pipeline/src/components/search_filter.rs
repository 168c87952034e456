use async_trait::async_trait;

use crate::filter::{Filter, FilterResult};
use crate::types::{CatalogQuery, ProductCandidate};

/// Keeps candidates whose name, reference, or code contains the query's
/// search term, case-insensitively. Skipped entirely when the query has no
/// search term.
pub struct SearchFilter;

#[async_trait]
impl Filter<CatalogQuery, ProductCandidate> for SearchFilter {
    fn enable(&self, query: &CatalogQuery) -> bool {
        query.search.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    async fn filter(
        &self,
        query: &CatalogQuery,
        candidates: Vec<ProductCandidate>,
    ) -> Result<FilterResult<ProductCandidate>, String> {
        let needle = query
            .search
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        let (kept, removed): (Vec<_>, Vec<_>) = candidates.into_iter().partition(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.reference.to_lowercase().contains(&needle)
                || c.code.to_lowercase().contains(&needle)
        });

        Ok(FilterResult { kept, removed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candidate(name: &str, code: &str) -> ProductCandidate {
        ProductCandidate {
            name: name.to_string(),
            code: code.to_string(),
            ..ProductCandidate::default()
        }
    }

    #[tokio::test]
    async fn matches_across_name_and_code() {
        let filter = SearchFilter;
        let query = CatalogQuery {
            search: Some("reloj".into()),
            ..CatalogQuery::similar_to("test-001", 10_000.0)
        };
        let candidates = vec![
            make_candidate("Reloj Pulsera Dama", "7701003"),
            make_candidate("Llavero LED", "7701004"),
            make_candidate("Correa", "RELOJ-99"),
        ];

        let FilterResult { kept, removed } = filter.filter(&query, candidates).await.unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].name, "Llavero LED");
    }

    #[test]
    fn disabled_without_search_term() {
        let filter = SearchFilter;
        let query = CatalogQuery::similar_to("test-002", 10_000.0);
        assert!(!Filter::enable(&filter, &query));

        let blank = CatalogQuery {
            search: Some("   ".into()),
            ..query
        };
        assert!(!Filter::enable(&filter, &blank));
    }
}
