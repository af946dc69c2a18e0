//! Analyzer configuration.

use serde::{Deserialize, Serialize};

/// Tunable thresholds for profile analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Order size above which an order counts as "large" for risk scoring
    pub large_order_threshold: f64,

    /// Inter-trade gaps at or above this many minutes are excluded from the
    /// average-interval calculation as outliers
    pub gap_outlier_minutes: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            large_order_threshold: 10_000.0,
            gap_outlier_minutes: 60.0 * 24.0 * 7.0, // one week
        }
    }
}
