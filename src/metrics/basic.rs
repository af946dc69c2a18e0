//! Basic order statistics: counts, fill rate, order-type histogram.

use std::collections::BTreeMap;

use crate::metrics::round_dp;
use crate::models::{BasicStats, Order};

/// Count orders by outcome and type over the whole order set.
pub fn order_stats(orders: &[Order]) -> BasicStats {
    let total_orders = orders.len();
    let filled_orders = orders.iter().filter(|o| o.is_filled()).count();
    let canceled_orders = orders.iter().filter(|o| o.is_canceled()).count();

    let mut order_types: BTreeMap<String, usize> = BTreeMap::new();
    for order in orders {
        *order_types.entry(order.type_label().to_string()).or_insert(0) += 1;
    }

    let fill_rate = if total_orders > 0 {
        round_dp(filled_orders as f64 / total_orders as f64 * 100.0, 2)
    } else {
        0.0
    };

    BasicStats {
        total_orders,
        filled_orders,
        canceled_orders,
        fill_rate,
        order_types,
    }
}
