//! Discount safety analysis.
//!
//! Given a retail price and a proposed discount percentage, back-calculates
//! the wholesale cost basis, evaluates the post-discount margin against a
//! safety threshold, and checks the discount against the tier's recommended
//! band. The whole module is a pure function of its inputs plus an explicit
//! `DiscountPolicy`; nothing is stored between calls.

use std::fmt;

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::thresholds::{DEFAULT_MARKUP_FRACTION, DEFAULT_SAFETY_MARGIN_PCT};
use crate::tier::{DiscountBand, PriceTier, TierTable};

/// Back-calculate the wholesale cost basis from a retail price.
///
/// `markup_fraction` is the combined utility + transport share assumed to
/// sit on top of wholesale. It is configuration, not data, so the domain
/// check is a debug assertion rather than a runtime error.
pub fn wholesale_price(price: f64, markup_fraction: f64) -> f64 {
    debug_assert!(
        (0.0..1.0).contains(&markup_fraction),
        "markup_fraction must be in [0, 1), got {markup_fraction}"
    );
    price * (1.0 - markup_fraction)
}

/// Three-way outcome of a discount analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// Margin is safe and the discount sits inside the recommended band.
    Optimal,
    /// Margin is safe but the discount is outside the recommended band.
    SafeOutOfBand,
    /// Margin falls below the safety threshold.
    Risky,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Optimal => write!(f, "Optimal"),
            Verdict::SafeOutOfBand => write!(f, "Safe (outside band)"),
            Verdict::Risky => write!(f, "Risky"),
        }
    }
}

/// The fully evaluated result of one discount request.
///
/// Derived and immutable; recomputed per request, never persisted.
#[derive(Clone, Debug, Serialize)]
pub struct DiscountAnalysis {
    pub price: f64,
    pub discount_pct: f64,
    pub final_price: f64,
    pub discount_amount: f64,
    pub wholesale_price: f64,
    pub margin_pct: f64,
    pub is_safe: bool,
    pub within_band: bool,
    pub verdict: Verdict,
    pub tier: PriceTier,
    pub recommended: DiscountBand,
}

/// Explicit analyzer configuration.
///
/// Thresholds, markup fraction, and the tier table are first-class
/// parameters here instead of module-level constants, so two callers with
/// different business assumptions can run side by side.
#[derive(Clone, Debug)]
pub struct DiscountPolicy {
    /// Share of the retail price assumed to be utility + transport, in `[0, 1)`.
    pub markup_fraction: f64,
    /// Minimum post-discount margin (percent over wholesale) to call a
    /// discount safe.
    pub safety_margin_pct: f64,
    /// Optional caller-imposed cap on the discount percentage, tighter than
    /// the engine's own `[0, 100]` domain.
    pub max_discount_pct: Option<f64>,
    pub tiers: TierTable,
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        Self {
            markup_fraction: DEFAULT_MARKUP_FRACTION,
            safety_margin_pct: DEFAULT_SAFETY_MARGIN_PCT,
            max_discount_pct: None,
            tiers: TierTable::default(),
        }
    }
}

impl DiscountPolicy {
    /// Tighten the discount cap below the engine's `[0, 100]` domain.
    pub fn with_max_discount(mut self, cap_pct: f64) -> Self {
        self.max_discount_pct = Some(cap_pct);
        self
    }

    /// Analyze one proposed discount.
    ///
    /// Rejects `price <= 0`, non-finite inputs, and discounts outside
    /// `[0, 100]` (or above the policy cap when one is set). Everything else
    /// returns a fully populated result.
    pub fn analyze(&self, price: f64, discount_pct: f64) -> AnalysisResult<DiscountAnalysis> {
        if !price.is_finite() || price <= 0.0 {
            return Err(AnalysisError::InvalidInput {
                field: "price",
                reason: format!("must be a positive amount, got {price}"),
            });
        }
        if !discount_pct.is_finite() || !(0.0..=100.0).contains(&discount_pct) {
            return Err(AnalysisError::InvalidInput {
                field: "discount_pct",
                reason: format!("must be between 0 and 100, got {discount_pct}"),
            });
        }
        if let Some(cap) = self.max_discount_pct {
            if discount_pct > cap {
                return Err(AnalysisError::InvalidInput {
                    field: "discount_pct",
                    reason: format!("exceeds the policy cap of {cap}%, got {discount_pct}"),
                });
            }
        }

        let final_price = price * (1.0 - discount_pct / 100.0);
        let discount_amount = price - final_price;
        let wholesale = wholesale_price(price, self.markup_fraction);
        let margin_pct = (final_price - wholesale) / wholesale * 100.0;

        let is_safe = margin_pct >= self.safety_margin_pct;
        let (tier, recommended) = self.tiers.classify(price);
        let within_band = recommended.contains(discount_pct);

        let verdict = match (is_safe, within_band) {
            (true, true) => Verdict::Optimal,
            (true, false) => Verdict::SafeOutOfBand,
            (false, _) => Verdict::Risky,
        };

        Ok(DiscountAnalysis {
            price,
            discount_pct,
            final_price,
            discount_amount,
            wholesale_price: wholesale,
            margin_pct,
            is_safe,
            within_band,
            verdict,
            tier,
            recommended,
        })
    }

    /// Largest discount that still holds the margin at the safety threshold.
    ///
    /// Clamped at 0 for prices whose full margin is already below the
    /// threshold.
    pub fn max_safe_discount(&self, price: f64) -> f64 {
        if price <= 0.0 {
            return 0.0;
        }
        let wholesale = wholesale_price(price, self.markup_fraction);
        let price_floor = wholesale * (1.0 + self.safety_margin_pct / 100.0);
        ((price - price_floor) / price * 100.0).max(0.0)
    }
}
