//! Execution model representing individual fills from an execution export.
//!
//! Executions are loaded and counted but feed no aggregator yet; the columns
//! are kept typed so execution-based metrics can be added once requirements
//! firm up.

use serde::{Deserialize, Serialize};

/// Direction of a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecSide {
    Buy,
    Sell,
}

impl ExecSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecSide::Buy => "Buy",
            ExecSide::Sell => "Sell",
        }
    }
}

/// A single execution record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Execution {
    /// Exchange-assigned execution identifier
    #[serde(rename = "execID", default)]
    pub exec_id: String,

    /// Order this fill belongs to
    #[serde(rename = "orderID", default)]
    pub order_id: String,

    /// Fill direction
    pub side: ExecSide,

    /// Filled quantity
    #[serde(rename = "lastQty")]
    pub last_qty: f64,

    /// Fill price
    #[serde(rename = "lastPx")]
    pub last_px: f64,

    /// Cost of the fill in minor units
    #[serde(rename = "execCost", default)]
    pub exec_cost: i64,

    /// Commission in minor units
    #[serde(rename = "execComm", default)]
    pub exec_comm: i64,

    /// ISO-8601 fill time as exported
    #[serde(default)]
    pub timestamp: String,
}
