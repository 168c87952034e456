//! Price-tier classification.
//!
//! Two thresholds partition the price line into three tiers, and each tier
//! carries a recommended discount band. A price exactly at a threshold
//! belongs to the tier above it (strict `<` comparison).

use std::fmt;

use serde::Serialize;

use crate::thresholds::{
    LARGE_TIER_BAND, MEDIUM_TIER_BAND, MEDIUM_TIER_MAX_PRICE, SMALL_TIER_BAND,
    SMALL_TIER_MAX_PRICE,
};

/// Price-based product size classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PriceTier {
    Small,
    Medium,
    Large,
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceTier::Small => write!(f, "Small"),
            PriceTier::Medium => write!(f, "Medium"),
            PriceTier::Large => write!(f, "Large"),
        }
    }
}

/// Recommended discount range for a tier, in percent, both ends inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DiscountBand {
    pub min_pct: f64,
    pub max_pct: f64,
}

impl DiscountBand {
    pub const fn new(min_pct: f64, max_pct: f64) -> Self {
        Self { min_pct, max_pct }
    }

    /// Is the given discount inside the recommended range?
    pub fn contains(&self, discount_pct: f64) -> bool {
        self.min_pct <= discount_pct && discount_pct <= self.max_pct
    }
}

impl fmt::Display for DiscountBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}%", self.min_pct, self.max_pct)
    }
}

/// Explicit tier configuration: the two thresholds plus one band per tier.
#[derive(Clone, Debug, Serialize)]
pub struct TierTable {
    /// Prices below this are `Small`.
    pub small_max_price: f64,
    /// Prices below this (and not `Small`) are `Medium`; the rest are `Large`.
    pub medium_max_price: f64,
    pub small_band: DiscountBand,
    pub medium_band: DiscountBand,
    pub large_band: DiscountBand,
}

impl Default for TierTable {
    fn default() -> Self {
        Self {
            small_max_price: SMALL_TIER_MAX_PRICE,
            medium_max_price: MEDIUM_TIER_MAX_PRICE,
            small_band: DiscountBand::new(SMALL_TIER_BAND.0, SMALL_TIER_BAND.1),
            medium_band: DiscountBand::new(MEDIUM_TIER_BAND.0, MEDIUM_TIER_BAND.1),
            large_band: DiscountBand::new(LARGE_TIER_BAND.0, LARGE_TIER_BAND.1),
        }
    }
}

impl TierTable {
    /// Classify a price into its tier and recommended band.
    ///
    /// Total over `price >= 0`: a price of 0 falls in the lowest tier.
    pub fn classify(&self, price: f64) -> (PriceTier, DiscountBand) {
        if price < self.small_max_price {
            (PriceTier::Small, self.small_band)
        } else if price < self.medium_max_price {
            (PriceTier::Medium, self.medium_band)
        } else {
            (PriceTier::Large, self.large_band)
        }
    }

    /// The recommended band for an already-known tier.
    pub fn band(&self, tier: PriceTier) -> DiscountBand {
        match tier {
            PriceTier::Small => self.small_band,
            PriceTier::Medium => self.medium_band,
            PriceTier::Large => self.large_band,
        }
    }
}
