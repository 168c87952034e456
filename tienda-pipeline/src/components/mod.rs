pub mod catalog_source;
pub mod in_stock_filter;
pub mod price_band_filter;
pub mod price_band_query_hydrator;
pub mod price_proximity_scorer;
pub mod price_tier_hydrator;
pub mod search_filter;
pub mod selection_log_side_effect;
pub mod stock_level_hydrator;
pub mod top_k_selector;
