use tienda_pipeline::candidate_pipeline::CandidatePipeline;
use tienda_pipeline::catalog_loader::ProductRecord;
use tienda_pipeline::components::catalog_source::CatalogSource;
use tienda_pipeline::components::in_stock_filter::InStockFilter;
use tienda_pipeline::components::price_band_filter::PriceBandFilter;
use tienda_pipeline::components::price_proximity_scorer::PriceProximityScorer;
use tienda_pipeline::components::search_filter::SearchFilter;
use tienda_pipeline::components::top_k_selector::TopKSelector;
use tienda_pipeline::filter::{Filter, FilterResult};
use tienda_pipeline::pipelines::similar_products::SimilarProductsPipeline;
use tienda_pipeline::scorer::Scorer;
use tienda_pipeline::selector::Selector;
use tienda_pipeline::source::Source;
use tienda_pipeline::types::*;

// ---------------------------------------------------------------------------
// Test data fixtures
// ---------------------------------------------------------------------------

/// A realistic slice of the shop's catalog across the three price tiers.
fn sample_catalog() -> Vec<ProductRecord> {
    vec![
        ProductRecord {
            name: "Audifonos Bluetooth".into(),
            reference: "AUD-220".into(),
            code: "7701001".into(),
            quantity: 12,
            price: 45_000.0,
        },
        ProductRecord {
            name: "Plancha de Cabello".into(),
            reference: "PLA-034".into(),
            code: "7701002".into(),
            quantity: 0,
            price: 52_000.0,
        },
        ProductRecord {
            name: "Reloj Pulsera Dama".into(),
            reference: "REL-118".into(),
            code: "7701003".into(),
            quantity: 3,
            price: 55_000.0,
        },
        ProductRecord {
            name: "Llavero LED".into(),
            reference: "LLA-005".into(),
            code: "7701004".into(),
            quantity: 60,
            price: 8_000.0,
        },
        ProductRecord {
            name: "Parlante Portatil".into(),
            reference: "PAR-410".into(),
            code: "7701005".into(),
            quantity: 7,
            price: 120_000.0,
        },
        ProductRecord {
            name: "Bolso de Mano".into(),
            reference: "BOL-201".into(),
            code: "7701006".into(),
            quantity: 9,
            price: 48_500.0,
        },
        ProductRecord {
            name: "Set de Brochas".into(),
            reference: "BRO-077".into(),
            code: "7701007".into(),
            quantity: 25,
            price: 42_000.0,
        },
        ProductRecord {
            name: "Cargador Rapido".into(),
            reference: "CAR-310".into(),
            code: "7701008".into(),
            quantity: 18,
            price: 59_000.0,
        },
    ]
}

// ---------------------------------------------------------------------------
// Source tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_source_produces_one_candidate_per_record() {
    let source = CatalogSource::new(sample_catalog());
    let query = CatalogQuery::similar_to("test-001", 50_000.0);
    let candidates = source.get_candidates(&query).await.unwrap();
    assert_eq!(candidates.len(), 8);
}

#[tokio::test]
async fn catalog_source_disabled_for_empty_catalog() {
    let source = CatalogSource::new(vec![]);
    let query = CatalogQuery::similar_to("test-002", 50_000.0);
    assert!(!source.enable(&query));
}

// ---------------------------------------------------------------------------
// Filter tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_filter_matches_name_reference_and_code() {
    let filter = SearchFilter;
    let query = CatalogQuery {
        search: Some("rel".into()),
        ..CatalogQuery::similar_to("test-003", 50_000.0)
    };
    let candidates: Vec<ProductCandidate> =
        sample_catalog().iter().map(|r| r.to_candidate()).collect();

    let FilterResult { kept, .. } = filter.filter(&query, candidates).await.unwrap();
    // "Reloj Pulsera Dama" by name and "REL-118" by reference are the same
    // product; nothing else contains "rel".
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "Reloj Pulsera Dama");
}

#[tokio::test]
async fn price_band_filter_keeps_the_window() {
    let filter = PriceBandFilter;
    let query = CatalogQuery {
        price_band: Some(PriceBand {
            min: 40_000.0,
            max: 60_000.0,
        }),
        ..CatalogQuery::similar_to("test-004", 50_000.0)
    };
    let candidates: Vec<ProductCandidate> =
        sample_catalog().iter().map(|r| r.to_candidate()).collect();

    let FilterResult { kept, removed } = filter.filter(&query, candidates).await.unwrap();
    assert_eq!(kept.len(), 6);
    assert!(removed.iter().any(|c| c.name == "Llavero LED"));
    assert!(removed.iter().any(|c| c.name == "Parlante Portatil"));
}

#[tokio::test]
async fn in_stock_filter_drops_empty_shelves() {
    let filter = InStockFilter;
    let query = CatalogQuery::similar_to("test-005", 50_000.0);
    let candidates: Vec<ProductCandidate> =
        sample_catalog().iter().map(|r| r.to_candidate()).collect();

    let FilterResult { kept, removed } = filter.filter(&query, candidates).await.unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].name, "Plancha de Cabello");
    assert_eq!(kept.len(), 7);
}

// ---------------------------------------------------------------------------
// Scorer and selector tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn proximity_scorer_prefers_prices_near_the_reference() {
    let scorer = PriceProximityScorer;
    let query = CatalogQuery::similar_to("test-006", 50_000.0);
    let candidates: Vec<ProductCandidate> = vec![
        ProductCandidate {
            name: "near".into(),
            price: 48_500.0,
            stock_level: Some(StockLevel::Ok),
            ..ProductCandidate::default()
        },
        ProductCandidate {
            name: "far".into(),
            price: 59_000.0,
            stock_level: Some(StockLevel::Ok),
            ..ProductCandidate::default()
        },
    ];

    let scored = scorer.score(&query, &candidates).await.unwrap();
    assert!(scored[0].relevance_score.unwrap() > scored[1].relevance_score.unwrap());
}

#[test]
fn top_k_selector_sorts_descending() {
    let selector = TopKSelector { k: 3 };
    let query = CatalogQuery::similar_to("test-007", 50_000.0);
    let candidates = vec![
        ProductCandidate {
            name: "c".into(),
            relevance_score: Some(0.3),
            ..ProductCandidate::default()
        },
        ProductCandidate {
            name: "a".into(),
            relevance_score: Some(0.9),
            ..ProductCandidate::default()
        },
        ProductCandidate {
            name: "b".into(),
            relevance_score: Some(0.6),
            ..ProductCandidate::default()
        },
    ];

    let selected = selector.select(&query, candidates);
    let names: Vec<&str> = selected.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

// ---------------------------------------------------------------------------
// Full pipeline integration tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn similar_products_end_to_end() {
    let pipeline = SimilarProductsPipeline::with_catalog(sample_catalog());
    let query = CatalogQuery::similar_to("test-008", 50_000.0);

    let result = pipeline.execute(query).await;

    // Everything in the catalog was retrieved before filtering.
    assert_eq!(result.retrieved_candidates.len(), 8);

    // The derived band is 40k-60k; the out-of-band and out-of-stock
    // products were filtered out.
    assert!(result
        .filtered_candidates
        .iter()
        .any(|c| c.name == "Llavero LED"));
    assert!(result
        .filtered_candidates
        .iter()
        .any(|c| c.name == "Plancha de Cabello"));

    // Five in-band, in-stock products remain and all fit the window.
    assert_eq!(result.selected_candidates.len(), 5);
    for candidate in &result.selected_candidates {
        assert!(candidate.price >= 40_000.0 && candidate.price <= 60_000.0);
        assert!(candidate.quantity > 0);
        assert!(candidate.stock_level.is_some());
        assert!(candidate.tier.is_some());
        assert!(candidate.relevance_score.is_some());
    }

    // Sorted by relevance descending.
    let scores: Vec<f64> = result
        .selected_candidates
        .iter()
        .map(|c| c.relevance_score.unwrap())
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "not sorted: {} < {}", pair[0], pair[1]);
    }

    // The closest-priced comfortable-stock product leads.
    assert_eq!(result.selected_candidates[0].name, "Bolso de Mano");
}

#[tokio::test]
async fn pipeline_result_size_is_respected() {
    let pipeline = SimilarProductsPipeline::with_catalog_and_size(sample_catalog(), 2);
    let query = CatalogQuery::similar_to("test-009", 50_000.0);
    let result = pipeline.execute(query).await;
    assert!(result.selected_candidates.len() <= 2);
}

#[tokio::test]
async fn explicit_band_overrides_the_derived_window() {
    let pipeline = SimilarProductsPipeline::with_catalog(sample_catalog());
    let query = CatalogQuery {
        price_band: Some(PriceBand {
            min: 100_000.0,
            max: 150_000.0,
        }),
        ..CatalogQuery::similar_to("test-010", 50_000.0)
    };
    let result = pipeline.execute(query).await;
    assert_eq!(result.selected_candidates.len(), 1);
    assert_eq!(result.selected_candidates[0].name, "Parlante Portatil");
}

#[tokio::test]
async fn out_of_stock_products_can_be_included_on_request() {
    let pipeline = SimilarProductsPipeline::with_catalog_and_size(sample_catalog(), 10);
    let query = CatalogQuery {
        include_out_of_stock: true,
        ..CatalogQuery::similar_to("test-011", 50_000.0)
    };
    let result = pipeline.execute(query).await;
    assert!(result
        .selected_candidates
        .iter()
        .any(|c| c.name == "Plancha de Cabello"));
    // The empty shelf is attenuated below every in-stock comparable.
    assert_eq!(
        result.selected_candidates.last().map(|c| c.name.as_str()),
        Some("Plancha de Cabello")
    );
}

#[tokio::test]
async fn search_narrows_the_selection() {
    let pipeline = SimilarProductsPipeline::with_catalog(sample_catalog());
    let query = CatalogQuery {
        search: Some("bolso".into()),
        ..CatalogQuery::similar_to("test-012", 50_000.0)
    };
    let result = pipeline.execute(query).await;
    assert_eq!(result.selected_candidates.len(), 1);
    assert_eq!(result.selected_candidates[0].name, "Bolso de Mano");
}

#[tokio::test]
async fn empty_catalog_yields_empty_result() {
    let pipeline = SimilarProductsPipeline::with_catalog(vec![]);
    let query = CatalogQuery::similar_to("test-013", 50_000.0);
    let result = pipeline.execute(query).await;
    assert!(result.retrieved_candidates.is_empty());
    assert!(result.selected_candidates.is_empty());
}

// ---------------------------------------------------------------------------
// Types tests
// ---------------------------------------------------------------------------

#[test]
fn product_candidate_default_has_no_enrichment() {
    let candidate = ProductCandidate::default();
    assert!(candidate.stock_level.is_none());
    assert!(candidate.tier.is_none());
    assert!(candidate.relevance_score.is_none());
}

#[test]
fn catalog_query_exposes_request_id() {
    use tienda_pipeline::candidate_pipeline::HasRequestId;
    let query = CatalogQuery::similar_to("test-014", 50_000.0);
    assert_eq!(query.request_id(), "test-014");
}
