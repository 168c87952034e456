use std::sync::Arc;

use async_trait::async_trait;

use crate::candidate_pipeline::CandidatePipeline;
use crate::catalog_loader::ProductRecord;
use crate::components::catalog_source::CatalogSource;
use crate::components::in_stock_filter::InStockFilter;
use crate::components::price_band_filter::PriceBandFilter;
use crate::components::price_band_query_hydrator::PriceBandQueryHydrator;
use crate::components::price_proximity_scorer::PriceProximityScorer;
use crate::components::price_tier_hydrator::PriceTierHydrator;
use crate::components::search_filter::SearchFilter;
use crate::components::selection_log_side_effect::SelectionLogSideEffect;
use crate::components::stock_level_hydrator::StockLevelHydrator;
use crate::components::top_k_selector::TopKSelector;
use crate::filter::Filter;
use crate::hydrator::Hydrator;
use crate::query_hydrator::QueryHydrator;
use crate::scorer::Scorer;
use crate::selector::Selector;
use crate::side_effect::SideEffect;
use crate::source::Source;
use crate::types::{CatalogQuery, ProductCandidate};

/// The "comparable products" lookup behind the discount calculator.
///
/// Pipeline flow:
/// 1. PriceBandQueryHydrator derives the 80%-120% window from the
///    analyzed price
/// 2. CatalogSource produces one candidate per catalog record
/// 3. StockLevelHydrator and PriceTierHydrator enrich the candidates
/// 4. SearchFilter, PriceBandFilter, and InStockFilter narrow them
/// 5. PriceProximityScorer ranks by closeness to the analyzed price
/// 6. TopKSelector keeps the top N
/// 7. SelectionLogSideEffect records the selection
pub struct SimilarProductsPipeline {
    query_hydrators: Vec<Box<dyn QueryHydrator<CatalogQuery>>>,
    sources: Vec<Box<dyn Source<CatalogQuery, ProductCandidate>>>,
    hydrators: Vec<Box<dyn Hydrator<CatalogQuery, ProductCandidate>>>,
    filters: Vec<Box<dyn Filter<CatalogQuery, ProductCandidate>>>,
    scorers: Vec<Box<dyn Scorer<CatalogQuery, ProductCandidate>>>,
    selector: TopKSelector,
    post_selection_hydrators: Vec<Box<dyn Hydrator<CatalogQuery, ProductCandidate>>>,
    post_selection_filters: Vec<Box<dyn Filter<CatalogQuery, ProductCandidate>>>,
    side_effects: Arc<Vec<Box<dyn SideEffect<CatalogQuery, ProductCandidate>>>>,
    result_size: usize,
}

impl SimilarProductsPipeline {
    /// Create a pipeline over the loaded catalog with the default result
    /// size of five.
    pub fn with_catalog(records: Vec<ProductRecord>) -> Self {
        Self::with_catalog_and_size(records, 5)
    }

    /// Create a pipeline over the loaded catalog with a custom result size.
    pub fn with_catalog_and_size(records: Vec<ProductRecord>, result_size: usize) -> Self {
        let query_hydrators: Vec<Box<dyn QueryHydrator<CatalogQuery>>> =
            vec![Box::new(PriceBandQueryHydrator::default())];

        let sources: Vec<Box<dyn Source<CatalogQuery, ProductCandidate>>> =
            vec![Box::new(CatalogSource::new(records))];

        let hydrators: Vec<Box<dyn Hydrator<CatalogQuery, ProductCandidate>>> = vec![
            Box::new(StockLevelHydrator::default()),
            Box::new(PriceTierHydrator::default()),
        ];

        let filters: Vec<Box<dyn Filter<CatalogQuery, ProductCandidate>>> = vec![
            Box::new(SearchFilter),
            Box::new(PriceBandFilter),
            Box::new(InStockFilter),
        ];

        let scorers: Vec<Box<dyn Scorer<CatalogQuery, ProductCandidate>>> =
            vec![Box::new(PriceProximityScorer)];

        let selector = TopKSelector { k: result_size };

        let side_effects: Arc<Vec<Box<dyn SideEffect<CatalogQuery, ProductCandidate>>>> =
            Arc::new(vec![Box::new(SelectionLogSideEffect)]);

        Self {
            query_hydrators,
            sources,
            hydrators,
            filters,
            scorers,
            selector,
            post_selection_hydrators: Vec::new(),
            post_selection_filters: Vec::new(),
            side_effects,
            result_size,
        }
    }
}

#[async_trait]
impl CandidatePipeline<CatalogQuery, ProductCandidate> for SimilarProductsPipeline {
    fn query_hydrators(&self) -> &[Box<dyn QueryHydrator<CatalogQuery>>] {
        &self.query_hydrators
    }

    fn sources(&self) -> &[Box<dyn Source<CatalogQuery, ProductCandidate>>] {
        &self.sources
    }

    fn hydrators(&self) -> &[Box<dyn Hydrator<CatalogQuery, ProductCandidate>>] {
        &self.hydrators
    }

    fn filters(&self) -> &[Box<dyn Filter<CatalogQuery, ProductCandidate>>] {
        &self.filters
    }

    fn scorers(&self) -> &[Box<dyn Scorer<CatalogQuery, ProductCandidate>>] {
        &self.scorers
    }

    fn selector(&self) -> &dyn Selector<CatalogQuery, ProductCandidate> {
        &self.selector
    }

    fn post_selection_hydrators(&self) -> &[Box<dyn Hydrator<CatalogQuery, ProductCandidate>>] {
        &self.post_selection_hydrators
    }

    fn post_selection_filters(&self) -> &[Box<dyn Filter<CatalogQuery, ProductCandidate>>] {
        &self.post_selection_filters
    }

    fn side_effects(&self) -> Arc<Vec<Box<dyn SideEffect<CatalogQuery, ProductCandidate>>>> {
        Arc::clone(&self.side_effects)
    }

    fn result_size(&self) -> usize {
        self.result_size
    }
}
