use crate::selector::Selector;
use crate::types::{CatalogQuery, ProductCandidate};

/// Selects the top K candidates by relevance score. The dashboard shows
/// five comparable products, so that is the default.
pub struct TopKSelector {
    pub k: usize,
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self { k: 5 }
    }
}

impl Selector<CatalogQuery, ProductCandidate> for TopKSelector {
    fn score(&self, candidate: &ProductCandidate) -> f64 {
        candidate.relevance_score.unwrap_or(f64::NEG_INFINITY)
    }

    fn size(&self) -> Option<usize> {
        Some(self.k)
    }
}
