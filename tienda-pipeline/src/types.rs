use std::fmt;

use serde::Serialize;
use tienda_core::PriceTier;

use crate::candidate_pipeline::HasRequestId;

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Inclusive price window used by range queries.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PriceBand {
    pub min: f64,
    pub max: f64,
}

impl PriceBand {
    /// A symmetric window around a reference price; `spread` is the
    /// fraction on each side (0.2 means 80%-120% of the reference).
    pub fn around(reference: f64, spread: f64) -> Self {
        Self {
            min: reference * (1.0 - spread),
            max: reference * (1.0 + spread),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// A catalog lookup from the dashboard or the discount calculator.
#[derive(Clone, Debug)]
pub struct CatalogQuery {
    pub request_id: String,
    /// Free-text match against product name, reference, and code.
    pub search: Option<String>,
    /// Explicit price window; derived from `reference_price` when unset.
    pub price_band: Option<PriceBand>,
    /// The price being analyzed, used to find comparable products.
    pub reference_price: Option<f64>,
    /// Keep products with zero on-hand quantity in the results.
    pub include_out_of_stock: bool,
}

impl CatalogQuery {
    /// A comparable-products lookup around one analyzed price.
    pub fn similar_to(request_id: impl Into<String>, reference_price: f64) -> Self {
        Self {
            request_id: request_id.into(),
            search: None,
            price_band: None,
            reference_price: Some(reference_price),
            include_out_of_stock: false,
        }
    }
}

impl HasRequestId for CatalogQuery {
    fn request_id(&self) -> &str {
        &self.request_id
    }
}

// ---------------------------------------------------------------------------
// Candidate types
// ---------------------------------------------------------------------------

/// The stock position of a product, from its on-hand quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StockLevel {
    OutOfStock,
    Low,
    Ok,
}

impl StockLevel {
    /// Classify an on-hand quantity; `low_threshold` is exclusive.
    pub fn classify(quantity: i64, low_threshold: i64) -> Self {
        if quantity <= 0 {
            StockLevel::OutOfStock
        } else if quantity < low_threshold {
            StockLevel::Low
        } else {
            StockLevel::Ok
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLevel::OutOfStock => write!(f, "Out of stock"),
            StockLevel::Low => write!(f, "Low stock"),
            StockLevel::Ok => write!(f, "In stock"),
        }
    }
}

/// A catalog product flowing through the pipeline.
#[derive(Clone, Debug, Serialize)]
pub struct ProductCandidate {
    pub name: String,
    pub reference: String,
    pub code: String,
    pub quantity: i64,
    pub price: f64,

    // Enrichment fields (populated by hydrators and scorers)
    pub stock_level: Option<StockLevel>,
    pub tier: Option<PriceTier>,
    pub relevance_score: Option<f64>,
}

impl Default for ProductCandidate {
    fn default() -> Self {
        Self {
            name: String::new(),
            reference: String::new(),
            code: String::new(),
            quantity: 0,
            price: 0.0,
            stock_level: None,
            tier: None,
            relevance_score: None,
        }
    }
}
