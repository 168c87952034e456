use std::sync::Arc;

use async_trait::async_trait;

use crate::side_effect::{SideEffect, SideEffectInput};
use crate::types::{CatalogQuery, ProductCandidate};

/// Logs what each lookup selected, giving the shop an audit trail of which
/// comparisons backed a discount decision.
pub struct SelectionLogSideEffect;

#[async_trait]
impl SideEffect<CatalogQuery, ProductCandidate> for SelectionLogSideEffect {
    async fn run(
        &self,
        input: Arc<SideEffectInput<CatalogQuery, ProductCandidate>>,
    ) -> Result<(), String> {
        log::info!(
            "request_id={} selected {} comparable products",
            input.query.request_id,
            input.selected_candidates.len()
        );
        Ok(())
    }
}
