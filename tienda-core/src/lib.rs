pub mod currency;
pub mod discount;
pub mod error;
pub mod thresholds;
pub mod tier;

pub use currency::{Currency, RateTable};
pub use discount::{wholesale_price, DiscountAnalysis, DiscountPolicy, Verdict};
pub use error::{AnalysisError, CurrencyError};
pub use tier::{DiscountBand, PriceTier, TierTable};
