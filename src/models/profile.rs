//! Trader profile output model.
//!
//! Sections that require a minimum sample count are `Option`al and omitted
//! from the serialized document entirely when the data cannot support them.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel emitted for an undefined (infinite) profit factor. Deliberately a
/// string so it can never be mistaken for a numeric value in the output.
pub const PROFIT_FACTOR_INFINITE: &str = "inf";

/// Ratio of average win to average loss, or infinite when there are no losses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfitFactor {
    Finite(f64),
    Infinite,
}

impl Serialize for ProfitFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProfitFactor::Finite(value) => serializer.serialize_f64(*value),
            ProfitFactor::Infinite => serializer.serialize_str(PROFIT_FACTOR_INFINITE),
        }
    }
}

impl<'de> Deserialize<'de> for ProfitFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(ProfitFactor::Finite(value)),
            Repr::Text(text) if text == PROFIT_FACTOR_INFINITE => Ok(ProfitFactor::Infinite),
            Repr::Text(text) => Err(D::Error::custom(format!(
                "invalid profit factor: {text:?}"
            ))),
        }
    }
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitFactor::Finite(value) => write!(f, "{value:.2}"),
            ProfitFactor::Infinite => f.write_str(PROFIT_FACTOR_INFINITE),
        }
    }
}

/// Counts and fill rate over the whole order set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub total_orders: usize,
    pub filled_orders: usize,
    pub canceled_orders: usize,
    /// Filled / total, percent, 2 decimals; 0 for an empty order set
    pub fill_rate: f64,
    /// Order-type label -> count, with an "Unknown" bucket
    pub order_types: BTreeMap<String, usize>,
}

/// Hour-of-day and weekday activity distribution of filled orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingPatterns {
    /// Hour (0-23) -> filled order count
    pub hour_distribution: BTreeMap<u32, usize>,
    /// Weekday (0=Mon .. 6=Sun) -> filled order count
    pub weekday_distribution: BTreeMap<u32, usize>,
    pub most_active_hour: u32,
    /// Label from [`crate::metrics::WEEKDAY_LABELS`]
    pub most_active_day: String,
}

/// Order-size statistics and the derived risk classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPreference {
    pub avg_order_size: f64,
    pub max_order_size: f64,
    pub min_order_size: f64,
    /// Share of filled orders above the large-order threshold, percent
    pub large_order_ratio: f64,
    /// Integer score in [1, 10]
    pub risk_score: u8,
    pub risk_level: String,
}

/// Trading cadence over the span of filled orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingFrequency {
    pub total_trading_days: i64,
    pub daily_avg_trades: f64,
    /// Mean gap between consecutive trades, outlier gaps excluded; 0 when
    /// every gap was an outlier
    pub avg_trade_interval_minutes: f64,
    /// Integer score in [1, 10]
    pub frequency_score: u8,
    pub frequency_level: String,
}

/// Discipline and patience assessment from order-type and cancel ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineScores {
    pub limit_order_ratio: f64,
    pub cancel_ratio: f64,
    pub discipline_score: u8,
    pub patience_score: u8,
    pub discipline_level: String,
    pub patience_level: String,
}

/// Realised-PnL statistics from the wallet history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlAnalysis {
    pub total_pnl_btc: Decimal,
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub win_rate: f64,
    pub avg_win_btc: Decimal,
    /// Absolute value of the average losing amount
    pub avg_loss_btc: Decimal,
    pub profit_factor: ProfitFactor,
}

/// Overall classification and advice derived from the section metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub trader_type: String,
    pub risk_level: String,
    pub frequency_level: String,
    pub discipline_level: String,
    /// Mean of the four scores (missing scores default to 5), 1 decimal
    pub overall_score: f64,
    /// Exactly three advice lines
    pub advice: Vec<String>,
}

/// The composed trader profile. Built once per run, serialized verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderProfile {
    pub basic_stats: BasicStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_preference: Option<RiskPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_frequency: Option<TradingFrequency>,
    pub discipline_scores: DisciplineScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_patterns: Option<TradingPatterns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pnl_analysis: Option<PnlAnalysis>,
    pub summary: ProfileSummary,
}
