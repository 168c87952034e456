//! Centralized pricing defaults for the discount engine.
//!
//! These values are calibrated for a small-variety retail shop pricing in
//! Colombian pesos. They only seed the `Default` impls of `DiscountPolicy`
//! and `TierTable`; every caller can override them with its own
//! configuration at call time.

/// Combined utility + transport share assumed to sit on top of wholesale.
/// A retail price is back-calculated to wholesale as `price * (1 - fraction)`.
pub const DEFAULT_MARKUP_FRACTION: f64 = 0.35;

/// Minimum post-discount margin (percent over wholesale) for a discount to
/// be considered safe.
pub const DEFAULT_SAFETY_MARGIN_PCT: f64 = 10.0;

/// Prices strictly below this amount fall in the `Small` tier.
pub const SMALL_TIER_MAX_PRICE: f64 = 20_000.0;

/// Prices strictly below this amount (and at or above the small-tier cap)
/// fall in the `Medium` tier. Everything else is `Large`.
pub const MEDIUM_TIER_MAX_PRICE: f64 = 100_000.0;

/// Recommended discount band for `Small` tier products (percent).
pub const SMALL_TIER_BAND: (f64, f64) = (1.0, 7.0);

/// Recommended discount band for `Medium` tier products (percent).
pub const MEDIUM_TIER_BAND: (f64, f64) = (7.0, 12.0);

/// Recommended discount band for `Large` tier products (percent).
pub const LARGE_TIER_BAND: (f64, f64) = (10.0, 15.0);
