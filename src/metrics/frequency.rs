//! Trading frequency: span, daily average, and inter-trade intervals.

use chrono::{DateTime, Utc};
use statrs::statistics::Statistics;

use crate::config::ProfileConfig;
use crate::metrics::{clamp_score, round_dp};
use crate::models::TradingFrequency;

/// Build the frequency section from parsed fill timestamps.
///
/// `filled_count` is the number of filled orders, including those whose
/// timestamp failed to parse. Requires at least two parsed timestamps.
pub fn trading_frequency(
    filled_count: usize,
    timestamps: &[DateTime<Utc>],
    config: &ProfileConfig,
) -> Option<TradingFrequency> {
    if timestamps.len() < 2 {
        return None;
    }

    let first = timestamps.iter().min()?;
    let last = timestamps.iter().max()?;

    // Minimum one day so sub-day spans don't divide by zero
    let mut total_trading_days = (*last - *first).num_days();
    if total_trading_days == 0 {
        total_trading_days = 1;
    }

    let daily_avg_trades = filled_count as f64 / total_trading_days as f64;

    let mut sorted = timestamps.to_vec();
    sorted.sort();

    let intervals: Vec<f64> = sorted
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_seconds() as f64 / 60.0)
        .filter(|minutes| *minutes > 0.0 && *minutes < config.gap_outlier_minutes)
        .collect();

    let avg_trade_interval_minutes = if intervals.is_empty() {
        0.0
    } else {
        intervals.mean()
    };

    let frequency_score = clamp_score(daily_avg_trades / 5.0);
    let frequency_level = if frequency_score >= 7 {
        "High Frequency"
    } else if frequency_score >= 4 {
        "Medium Frequency"
    } else {
        "Low Frequency"
    };

    Some(TradingFrequency {
        total_trading_days,
        daily_avg_trades: round_dp(daily_avg_trades, 2),
        avg_trade_interval_minutes: round_dp(avg_trade_interval_minutes, 2),
        frequency_score,
        frequency_level: frequency_level.to_string(),
    })
}
