//! The staged pipeline engine.
//!
//! Stage order: query hydrators -> sources -> hydrators -> filters ->
//! scorers -> selector -> post-selection hydrators/filters -> side effects.
//! A failing stage is logged and skipped, so one broken component degrades
//! the result instead of taking down the whole request.

use std::sync::Arc;

use async_trait::async_trait;

use crate::filter::Filter;
use crate::hydrator::Hydrator;
use crate::query_hydrator::QueryHydrator;
use crate::scorer::Scorer;
use crate::selector::Selector;
use crate::side_effect::{SideEffect, SideEffectInput};
use crate::source::Source;

/// Queries expose a request id so every log line can be traced back to the
/// request that produced it.
pub trait HasRequestId {
    fn request_id(&self) -> &str;
}

/// Everything a pipeline run produced, including what the filters removed.
pub struct PipelineResult<Q, C> {
    /// The query after hydration.
    pub query: Arc<Q>,
    /// All candidates the sources produced, before filtering.
    pub retrieved_candidates: Vec<C>,
    /// Candidates removed by pre-selection filters.
    pub filtered_candidates: Vec<C>,
    /// The final ranked selection.
    pub selected_candidates: Vec<C>,
}

/// A pipeline is a fixed arrangement of stage components. Implementors
/// supply the components; `execute` supplies the orchestration.
#[async_trait]
pub trait CandidatePipeline<Q, C>: Send + Sync
where
    Q: HasRequestId + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    fn query_hydrators(&self) -> &[Box<dyn QueryHydrator<Q>>];
    fn sources(&self) -> &[Box<dyn Source<Q, C>>];
    fn hydrators(&self) -> &[Box<dyn Hydrator<Q, C>>];
    fn filters(&self) -> &[Box<dyn Filter<Q, C>>];
    fn scorers(&self) -> &[Box<dyn Scorer<Q, C>>];
    fn selector(&self) -> &dyn Selector<Q, C>;
    fn post_selection_hydrators(&self) -> &[Box<dyn Hydrator<Q, C>>];
    fn post_selection_filters(&self) -> &[Box<dyn Filter<Q, C>>];
    fn side_effects(&self) -> Arc<Vec<Box<dyn SideEffect<Q, C>>>>;
    fn result_size(&self) -> usize;

    /// Run the full pipeline for one query.
    async fn execute(&self, query: Q) -> PipelineResult<Q, C> {
        let mut query = query;

        for hydrator in self.query_hydrators() {
            if !hydrator.enable(&query) {
                continue;
            }
            match hydrator.hydrate(&query).await {
                Ok(hydrated) => hydrator.update(&mut query, hydrated),
                Err(e) => log::warn!(
                    "request_id={} query hydrator {} failed: {}",
                    query.request_id(),
                    hydrator.name(),
                    e
                ),
            }
        }

        let mut retrieved: Vec<C> = Vec::new();
        for source in self.sources() {
            if !source.enable(&query) {
                continue;
            }
            match source.get_candidates(&query).await {
                Ok(mut candidates) => retrieved.append(&mut candidates),
                Err(e) => log::warn!(
                    "request_id={} source {} failed: {}",
                    query.request_id(),
                    source.name(),
                    e
                ),
            }
        }
        log::debug!(
            "request_id={} retrieved {} candidates",
            query.request_id(),
            retrieved.len()
        );

        let mut candidates = retrieved.clone();
        run_hydrators(self.hydrators(), &query, &mut candidates).await;

        let mut filtered_out: Vec<C> = Vec::new();
        run_filters(self.filters(), &query, &mut candidates, &mut filtered_out).await;

        for scorer in self.scorers() {
            if !scorer.enable(&query) {
                continue;
            }
            match scorer.score(&query, &candidates).await {
                Ok(scored) => {
                    for (candidate, scored) in candidates.iter_mut().zip(scored) {
                        scorer.update(candidate, scored);
                    }
                }
                Err(e) => log::warn!(
                    "request_id={} scorer {} failed: {}",
                    query.request_id(),
                    scorer.name(),
                    e
                ),
            }
        }

        let mut selected = if self.selector().enable(&query) {
            self.selector().select(&query, candidates)
        } else {
            candidates
        };

        run_hydrators(self.post_selection_hydrators(), &query, &mut selected).await;
        run_filters(
            self.post_selection_filters(),
            &query,
            &mut selected,
            &mut filtered_out,
        )
        .await;
        selected.truncate(self.result_size());

        let query = Arc::new(query);
        let input = Arc::new(SideEffectInput {
            query: Arc::clone(&query),
            selected_candidates: selected.clone(),
        });
        for side_effect in self.side_effects().iter() {
            if !side_effect.enable(Arc::clone(&query)) {
                continue;
            }
            if let Err(e) = side_effect.run(Arc::clone(&input)).await {
                log::warn!(
                    "request_id={} side effect {} failed: {}",
                    query.request_id(),
                    side_effect.name(),
                    e
                );
            }
        }

        PipelineResult {
            query,
            retrieved_candidates: retrieved,
            filtered_candidates: filtered_out,
            selected_candidates: selected,
        }
    }
}

async fn run_hydrators<Q, C>(hydrators: &[Box<dyn Hydrator<Q, C>>], query: &Q, candidates: &mut [C])
where
    Q: HasRequestId + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    for hydrator in hydrators {
        if !hydrator.enable(query) {
            continue;
        }
        match hydrator.hydrate(query, candidates).await {
            Ok(hydrated) => {
                for (candidate, hydrated) in candidates.iter_mut().zip(hydrated) {
                    hydrator.update(candidate, hydrated);
                }
            }
            Err(e) => log::warn!(
                "request_id={} hydrator {} failed: {}",
                query.request_id(),
                hydrator.name(),
                e
            ),
        }
    }
}

async fn run_filters<Q, C>(
    filters: &[Box<dyn Filter<Q, C>>],
    query: &Q,
    candidates: &mut Vec<C>,
    filtered_out: &mut Vec<C>,
) where
    Q: HasRequestId + Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    for filter in filters {
        if !filter.enable(query) {
            continue;
        }
        match filter.filter(query, candidates.clone()).await {
            Ok(result) => {
                *candidates = result.kept;
                filtered_out.extend(result.removed);
            }
            Err(e) => log::warn!(
                "request_id={} filter {} failed: {}",
                query.request_id(),
                filter.name(),
                e
            ),
        }
    }
}
