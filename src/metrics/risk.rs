//! Risk preference from the size distribution of filled orders.

use statrs::statistics::Statistics;

use crate::config::ProfileConfig;
use crate::metrics::{clamp_score, round_dp};
use crate::models::{Order, RiskPreference};

/// Build the risk section from filled orders.
///
/// Non-numeric and zero quantities are excluded; returns `None` when no
/// valid size remains.
pub fn risk_preference(filled: &[&Order], config: &ProfileConfig) -> Option<RiskPreference> {
    let sizes: Vec<f64> = filled
        .iter()
        .filter_map(|o| o.quantity())
        .map(f64::abs)
        .filter(|size| *size > 0.0)
        .collect();

    if sizes.is_empty() {
        return None;
    }

    let avg_order_size = sizes.clone().mean();
    let max_order_size = sizes.clone().max();
    let min_order_size = sizes.clone().min();

    let large_orders = sizes
        .iter()
        .filter(|&&size| size > config.large_order_threshold)
        .count();
    let large_order_ratio = large_orders as f64 / sizes.len() as f64 * 100.0;

    let risk_score = clamp_score(large_order_ratio / 5.0 + 3.0);
    let risk_level = if risk_score >= 7 {
        "High Risk"
    } else if risk_score >= 4 {
        "Medium Risk"
    } else {
        "Low Risk"
    };

    Some(RiskPreference {
        avg_order_size: round_dp(avg_order_size, 2),
        max_order_size,
        min_order_size,
        large_order_ratio: round_dp(large_order_ratio, 2),
        risk_score,
        risk_level: risk_level.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(qty: &str) -> Order {
        Order {
            ord_status: "Filled".to_string(),
            order_qty: qty.to_string(),
            ..Order::default()
        }
    }

    fn analyze(orders: &[Order]) -> Option<RiskPreference> {
        let refs: Vec<&Order> = orders.iter().collect();
        risk_preference(&refs, &ProfileConfig::default())
    }

    #[test]
    fn test_no_valid_sizes_omits_section() {
        assert!(analyze(&[]).is_none());
        assert!(analyze(&[order("0"), order("garbage"), order("")]).is_none());
    }

    #[test]
    fn test_size_statistics() {
        let orders = vec![order("1000"), order("-3000"), order("5000")];
        let risk = analyze(&orders).unwrap();

        assert_eq!(risk.avg_order_size, 3000.0);
        assert_eq!(risk.max_order_size, 5000.0);
        assert_eq!(risk.min_order_size, 1000.0);
        assert_eq!(risk.large_order_ratio, 0.0);
        // 0/5 + 3 = 3 -> Low Risk
        assert_eq!(risk.risk_score, 3);
        assert_eq!(risk.risk_level, "Low Risk");
    }

    #[test]
    fn test_large_order_ratio_drives_score() {
        // Half above the 10,000 threshold: ratio 50 -> score 50/5+3 = 13 -> 10
        let orders = vec![order("20000"), order("20000"), order("100"), order("100")];
        let risk = analyze(&orders).unwrap();

        assert_eq!(risk.large_order_ratio, 50.0);
        assert_eq!(risk.risk_score, 10);
        assert_eq!(risk.risk_level, "High Risk");
        assert!((1..=10).contains(&risk.risk_score));
    }

    #[test]
    fn test_medium_risk_band() {
        // Ratio 10 -> 10/5 + 3 = 5 -> Medium Risk
        let mut orders = vec![order("20000")];
        orders.extend(std::iter::repeat_with(|| order("100")).take(9));
        let risk = analyze(&orders).unwrap();

        assert_eq!(risk.risk_score, 5);
        assert_eq!(risk.risk_level, "Medium Risk");
    }
}
