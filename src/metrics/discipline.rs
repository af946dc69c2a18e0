//! Discipline and patience scoring from order-type and cancel ratios.

use crate::metrics::{clamp_score, round_dp};
use crate::models::{BasicStats, DisciplineScores};

/// Build the discipline section from the basic order statistics.
///
/// Always present: with no orders both ratios are 0 and the scores clamp to
/// their floor/ceiling values.
pub fn discipline_scores(basic: &BasicStats) -> DisciplineScores {
    let limit_orders = basic.order_types.get("Limit").copied().unwrap_or(0);
    let market_orders = basic.order_types.get("Market").copied().unwrap_or(0);
    let limit_market_total = limit_orders + market_orders;

    let limit_order_ratio = if limit_market_total > 0 {
        limit_orders as f64 / limit_market_total as f64 * 100.0
    } else {
        0.0
    };

    // More limit orders = more disciplined
    let discipline_score = clamp_score(limit_order_ratio / 10.0);

    let cancel_ratio = if basic.total_orders > 0 {
        basic.canceled_orders as f64 / basic.total_orders as f64 * 100.0
    } else {
        0.0
    };

    // Fewer cancels = more patient; raw value may truncate below 1 before the clamp
    let patience_score = clamp_score(10.0 - cancel_ratio / 5.0);

    let discipline_level = if discipline_score >= 7 {
        "Highly Disciplined"
    } else if discipline_score >= 4 {
        "Moderately Disciplined"
    } else {
        "Needs Improvement"
    };

    let patience_level = if patience_score >= 7 {
        "Very Patient"
    } else if patience_score >= 4 {
        "Moderately Patient"
    } else {
        "Impulsive"
    };

    DisciplineScores {
        limit_order_ratio: round_dp(limit_order_ratio, 2),
        cancel_ratio: round_dp(cancel_ratio, 2),
        discipline_score,
        patience_score,
        discipline_level: discipline_level.to_string(),
        patience_level: patience_level.to_string(),
    }
}
