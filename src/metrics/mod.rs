//! Metric aggregators: independent pure functions over the loaded record set,
//! plus the composer that merges their outputs into a [`crate::models::TraderProfile`].

mod basic;
mod patterns;
mod risk;
mod frequency;
mod discipline;
mod pnl;
mod composer;

pub use basic::order_stats;
pub use patterns::{time_patterns, WEEKDAY_LABELS};
pub use risk::risk_preference;
pub use frequency::trading_frequency;
pub use discipline::discipline_scores;
pub use pnl::pnl_analysis;
pub use composer::compose;

/// Round to a fixed number of decimal places.
pub(crate) fn round_dp(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Truncate toward zero and clamp into the [1, 10] score range.
pub(crate) fn clamp_score(raw: f64) -> u8 {
    (raw as i64).clamp(1, 10) as u8
}
