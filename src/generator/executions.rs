//! Synthetic execution records.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::metrics::round_dp;

const QTY_CHOICES: [i64; 6] = [100, 500, 1_000, 2_000, 5_000, 10_000];
const COMMISSION_RATE: f64 = 0.000_75;

/// One execution row in the BitMEX export column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRow {
    #[serde(rename = "execID")]
    pub exec_id: String,
    #[serde(rename = "orderID")]
    pub order_id: String,
    pub symbol: String,
    pub side: String,
    #[serde(rename = "lastQty")]
    pub last_qty: i64,
    #[serde(rename = "lastPx")]
    pub last_px: f64,
    #[serde(rename = "execType")]
    pub exec_type: String,
    #[serde(rename = "ordType")]
    pub ord_type: String,
    #[serde(rename = "ordStatus")]
    pub ord_status: String,
    #[serde(rename = "execCost")]
    pub exec_cost: i64,
    #[serde(rename = "execComm")]
    pub exec_comm: i64,
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// Generate up to 8 fills per day over the given span, with a 2%-sigma price
/// walk and per-fill commission at 0.075%.
pub fn generate(rng: &mut impl Rng, days: i64) -> Result<Vec<ExecutionRow>> {
    let start = Utc::now() - Duration::days(days);
    let walk = Normal::new(0.0, 0.02).context("invalid walk distribution")?;

    let mut executions = Vec::new();
    let mut exec_id = 1_000_000u64;
    let mut order_id = 2_000_000u64;
    let mut price = 45_000.0;

    for day in 0..days {
        let trades_today = rng.gen_range(0..=8);

        for _ in 0..trades_today {
            let timestamp = start
                + Duration::days(day)
                + Duration::hours(rng.gen_range(0..24))
                + Duration::minutes(rng.gen_range(0..60));

            let side = if rng.gen_bool(0.5) { "Buy" } else { "Sell" };
            let qty = *QTY_CHOICES.choose(rng).unwrap_or(&1_000);

            price *= 1.0 + walk.sample(rng);
            let exec_price = round_dp(price, 1);

            // Cost in BTC terms, stored back in minor units
            let exec_cost = qty as f64 * exec_price / 1e8;
            let exec_comm = exec_cost * COMMISSION_RATE;

            executions.push(ExecutionRow {
                exec_id: format!("exec-{exec_id}"),
                order_id: format!("order-{order_id}"),
                symbol: "XBTUSD".to_string(),
                side: side.to_string(),
                last_qty: qty,
                last_px: exec_price,
                exec_type: "Trade".to_string(),
                ord_type: if rng.gen_bool(0.5) { "Limit" } else { "Market" }.to_string(),
                ord_status: "Filled".to_string(),
                exec_cost: (exec_cost * 1e8).round() as i64,
                exec_comm: (exec_comm * 1e8).round() as i64,
                timestamp,
                text: String::new(),
            });

            exec_id += 1;
            if rng.gen_bool(0.3) {
                order_id += 1;
            }
        }
    }

    Ok(executions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_row_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let executions = generate(&mut rng, 30).unwrap();

        assert!(!executions.is_empty());
        for row in &executions {
            assert!(QTY_CHOICES.contains(&row.last_qty));
            assert!(row.side == "Buy" || row.side == "Sell");
            assert_eq!(row.ord_status, "Filled");
            let expected_cost = row.last_qty as f64 * row.last_px;
            assert!((row.exec_cost as f64 - expected_cost).abs() <= 1.0);
        }
    }

    #[test]
    fn test_at_most_eight_fills_per_day() {
        let mut rng = StdRng::seed_from_u64(6);
        let executions = generate(&mut rng, 60).unwrap();
        assert!(executions.len() <= 60 * 8);
    }

    #[test]
    fn test_exec_ids_unique_and_ordered() {
        let mut rng = StdRng::seed_from_u64(7);
        let executions = generate(&mut rng, 20).unwrap();

        let mut ids: Vec<&String> = executions.iter().map(|row| &row.exec_id).collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        let rows_a = generate(&mut a, 10).unwrap();
        let rows_b = generate(&mut b, 10).unwrap();
        let fields_a: Vec<_> = rows_a.iter().map(|r| (&r.exec_id, r.last_qty, r.last_px)).collect();
        let fields_b: Vec<_> = rows_b.iter().map(|r| (&r.exec_id, r.last_qty, r.last_px)).collect();
        assert_eq!(fields_a, fields_b);
    }
}
