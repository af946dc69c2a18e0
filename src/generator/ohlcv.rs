//! Random-walk OHLCV bar generation.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::metrics::round_dp;

/// One OHLCV price bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

fn bars_per_day(timeframe: &str) -> i64 {
    match timeframe {
        "1m" => 1440,
        "5m" => 288,
        "1h" => 24,
        "1d" => 1,
        _ => 24,
    }
}

fn bar_step(timeframe: &str) -> Duration {
    match timeframe {
        "1m" => Duration::minutes(1),
        "5m" => Duration::minutes(5),
        "1h" => Duration::hours(1),
        "1d" => Duration::days(1),
        _ => Duration::hours(1),
    }
}

/// Generate a Gaussian random-walk price series as OHLCV bars.
///
/// The walk steps with sigma 0.2% of price and is floored at half the current
/// price; highs and lows envelope the open by up to 2% each side.
pub fn generate_bars(
    rng: &mut impl Rng,
    symbol: &str,
    timeframe: &str,
    days: i64,
) -> Result<Vec<Bar>> {
    let total_bars = days * bars_per_day(timeframe);
    let step = bar_step(timeframe);

    let mut price: f64 = if symbol.contains("BTC") || symbol.contains("XBT") {
        30_000.0
    } else {
        2_000.0
    };

    let drift = Normal::new(0.0, 0.002).context("invalid drift distribution")?;
    let close_jitter = Normal::new(0.0, 0.01).context("invalid jitter distribution")?;

    let start = Utc::now() - Duration::days(days);
    let mut bars = Vec::with_capacity(total_bars as usize);

    for i in 0..total_bars {
        let timestamp = start + step * i as i32;

        let change = drift.sample(rng) * price;
        price = (price + change).max(price * 0.5);

        let open = price;
        let high = price * (1.0 + rng.gen_range(0.0..0.02));
        let low = price * (1.0 - rng.gen_range(0.0..0.02));
        let close = price * (1.0 + close_jitter.sample(rng));
        let volume = rng.gen_range(100.0..10_000.0);

        bars.push(Bar {
            timestamp,
            open: round_dp(open, 2),
            high: round_dp(high, 2),
            low: round_dp(low, 2),
            close: round_dp(close, 2),
            volume: round_dp(volume, 2),
        });

        price = close;
    }

    Ok(bars)
}
