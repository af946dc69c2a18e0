//! Profile composer: merges the aggregator outputs into a [`TraderProfile`]
//! and derives the overall classification.

use chrono::{DateTime, Utc};

use crate::config::ProfileConfig;
use crate::metrics::{self, round_dp};
use crate::models::{
    DisciplineScores, Execution, Order, ProfileSummary, RiskPreference, TraderProfile,
    TradingFrequency, WalletEntry,
};

/// Score assumed for a section that could not be computed.
const DEFAULT_SCORE: u8 = 5;

/// Run every aggregator over the loaded records and merge the results.
///
/// Executions are accepted but not consumed by any aggregator yet; the
/// parameter is kept so the call shape matches the loaded inputs.
pub fn compose(
    orders: &[Order],
    wallet: &[WalletEntry],
    _executions: &[Execution],
    config: &ProfileConfig,
) -> TraderProfile {
    let basic_stats = metrics::order_stats(orders);

    let filled: Vec<&Order> = orders.iter().filter(|o| o.is_filled()).collect();
    let timestamps: Vec<DateTime<Utc>> = filled
        .iter()
        .filter_map(|o| o.parsed_timestamp())
        .collect();

    let trading_patterns = metrics::time_patterns(&timestamps);
    let risk_preference = metrics::risk_preference(&filled, config);
    let trading_frequency = metrics::trading_frequency(filled.len(), &timestamps, config);
    let discipline_scores = metrics::discipline_scores(&basic_stats);
    let pnl_analysis = metrics::pnl_analysis(wallet);

    let summary = summarize(&risk_preference, &trading_frequency, &discipline_scores);

    TraderProfile {
        basic_stats,
        risk_preference,
        trading_frequency,
        discipline_scores,
        trading_patterns,
        pnl_analysis,
        summary,
    }
}

fn summarize(
    risk: &Option<RiskPreference>,
    frequency: &Option<TradingFrequency>,
    discipline: &DisciplineScores,
) -> ProfileSummary {
    let risk_level = risk
        .as_ref()
        .map(|r| r.risk_level.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let frequency_level = frequency
        .as_ref()
        .map(|f| f.frequency_level.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let trader_type = classify_trader(&frequency_level, &risk_level);

    let risk_score = risk.as_ref().map(|r| r.risk_score).unwrap_or(DEFAULT_SCORE);
    let frequency_score = frequency
        .as_ref()
        .map(|f| f.frequency_score)
        .unwrap_or(DEFAULT_SCORE);
    let score_sum =
        risk_score + frequency_score + discipline.discipline_score + discipline.patience_score;
    let overall_score = round_dp(score_sum as f64 / 4.0, 1);

    let daily_trades = frequency.as_ref().map(|f| f.daily_avg_trades).unwrap_or(0.0);

    let advice = vec![
        if discipline.limit_order_ratio > 70.0 {
            "Continue maintaining limit order trading habits to improve execution efficiency"
        } else {
            "Consider increasing limit order usage to reduce slippage costs"
        }
        .to_string(),
        if daily_trades < 50.0 {
            "Trading rhythm is stable, maintain current strategy"
        } else {
            "Consider reducing trading frequency to improve quality per trade"
        }
        .to_string(),
        if risk_score < 5 {
            "Risk control is good"
        } else {
            "Pay attention to controlling position sizes and diversifying risk"
        }
        .to_string(),
    ];

    ProfileSummary {
        trader_type: trader_type.to_string(),
        risk_level,
        frequency_level,
        discipline_level: discipline.discipline_level.clone(),
        overall_score,
        advice,
    }
}

/// Decision table over (frequency level, risk level); first match wins.
fn classify_trader(frequency_level: &str, risk_level: &str) -> &'static str {
    if frequency_level.contains("High") && risk_level.contains("High") {
        "Aggressive Day Trader"
    } else if frequency_level.contains("High") && risk_level.contains("Low") {
        "Conservative Day Trader"
    } else if frequency_level.contains("Low") && risk_level.contains("High") {
        "Bold Swing Trader"
    } else if frequency_level.contains("Low") && risk_level.contains("Low") {
        "Conservative Value Investor"
    } else if frequency_level.contains("Medium") {
        "Balanced Short-term Trader"
    } else {
        "Comprehensive Trader"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: &str, ord_type: &str, qty: &str, ts: &str) -> Order {
        Order {
            order_id: String::new(),
            ord_status: status.to_string(),
            ord_type: ord_type.to_string(),
            order_qty: qty.to_string(),
            timestamp: ts.to_string(),
        }
    }

    #[test]
    fn test_classify_trader_table() {
        assert_eq!(
            classify_trader("High Frequency", "High Risk"),
            "Aggressive Day Trader"
        );
        assert_eq!(
            classify_trader("High Frequency", "Low Risk"),
            "Conservative Day Trader"
        );
        assert_eq!(
            classify_trader("Low Frequency", "High Risk"),
            "Bold Swing Trader"
        );
        assert_eq!(
            classify_trader("Low Frequency", "Low Risk"),
            "Conservative Value Investor"
        );
        assert_eq!(
            classify_trader("Medium Frequency", "High Risk"),
            "Balanced Short-term Trader"
        );
        assert_eq!(classify_trader("Unknown", "Unknown"), "Comprehensive Trader");
        // High/Medium falls through to the Medium rule only via frequency
        assert_eq!(
            classify_trader("Low Frequency", "Medium Risk"),
            "Comprehensive Trader"
        );
    }

    #[test]
    fn test_empty_inputs_still_compose() {
        let profile = compose(&[], &[], &[], &ProfileConfig::default());

        assert_eq!(profile.basic_stats.total_orders, 0);
        assert_eq!(profile.basic_stats.fill_rate, 0.0);
        assert!(profile.risk_preference.is_none());
        assert!(profile.trading_frequency.is_none());
        assert!(profile.trading_patterns.is_none());
        assert!(profile.pnl_analysis.is_none());
        assert_eq!(profile.summary.trader_type, "Comprehensive Trader");
        assert_eq!(profile.summary.risk_level, "Unknown");
        // risk 5 + frequency 5 + discipline 1 + patience 10 = 21 / 4 = 5.3
        assert_eq!(profile.summary.overall_score, 5.3);
        assert_eq!(profile.summary.advice.len(), 3);
    }

    #[test]
    fn test_composed_profile_sections() {
        let orders = vec![
            order("Filled", "Limit", "1000", "2024-03-04T10:00:00Z"),
            order("Filled", "Limit", "2000", "2024-03-04T10:10:00Z"),
            order("Filled", "Limit", "3000", "2024-03-06T09:00:00Z"),
            order("Canceled", "Market", "500", "2024-03-06T09:30:00Z"),
        ];
        let wallet = vec![WalletEntry {
            transact_type: "RealisedPNL".to_string(),
            amount: "50000000".to_string(),
            ..WalletEntry::default()
        }];

        let profile = compose(&orders, &wallet, &[], &ProfileConfig::default());

        assert_eq!(profile.basic_stats.filled_orders, 3);
        let risk = profile.risk_preference.as_ref().unwrap();
        assert_eq!(risk.avg_order_size, 2000.0);
        let freq = profile.trading_frequency.as_ref().unwrap();
        assert_eq!(freq.total_trading_days, 1);
        assert!(profile.trading_patterns.is_some());
        assert!(profile.pnl_analysis.is_some());
        // All limit orders among limit+market: ratio 75 -> advice keeps habits
        assert_eq!(profile.discipline_scores.limit_order_ratio, 75.0);
        assert_eq!(
            profile.summary.advice[1],
            "Trading rhythm is stable, maintain current strategy"
        );
    }

    #[test]
    fn test_advice_flips_with_metrics() {
        // No frequency/risk sections: daily_trades 0, risk_score defaults to 5
        let profile = compose(&[], &[], &[], &ProfileConfig::default());
        assert_eq!(
            profile.summary.advice[0],
            "Consider increasing limit order usage to reduce slippage costs"
        );
        assert_eq!(
            profile.summary.advice[2],
            "Pay attention to controlling position sizes and diversifying risk"
        );
    }

    #[test]
    fn test_scores_always_in_range() {
        let orders = vec![
            order("Filled", "Market", "50000", "2024-03-04T10:00:00Z"),
            order("Filled", "Market", "60000", "2024-03-04T10:01:00Z"),
        ];
        let profile = compose(&orders, &[], &[], &ProfileConfig::default());

        let risk = profile.risk_preference.unwrap();
        let freq = profile.trading_frequency.unwrap();
        for score in [
            risk.risk_score,
            freq.frequency_score,
            profile.discipline_scores.discipline_score,
            profile.discipline_scores.patience_score,
        ] {
            assert!((1..=10).contains(&score));
        }
    }
}
