//! Order model representing rows from an order-history export.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single order record.
///
/// `order_qty` and `timestamp` are kept as raw text: a malformed value in
/// either column only drops the record from the metrics that need it, never
/// from the order counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    /// Exchange-assigned order identifier
    #[serde(rename = "orderID", default)]
    pub order_id: String,

    /// Order status (Filled, Canceled, New, ...)
    #[serde(rename = "ordStatus", default)]
    pub ord_status: String,

    /// Order type (Limit, Market, ...)
    #[serde(rename = "ordType", default)]
    pub ord_type: String,

    /// Signed order quantity as exported
    #[serde(rename = "orderQty", default)]
    pub order_qty: String,

    /// ISO-8601 submission time as exported
    #[serde(default)]
    pub timestamp: String,
}

impl Order {
    pub fn is_filled(&self) -> bool {
        self.ord_status == "Filled"
    }

    pub fn is_canceled(&self) -> bool {
        self.ord_status == "Canceled"
    }

    /// Order type for histogram bucketing; empty/missing types count as "Unknown".
    pub fn type_label(&self) -> &str {
        let label = self.ord_type.trim();
        if label.is_empty() {
            "Unknown"
        } else {
            label
        }
    }

    /// Order quantity coerced to a number, `None` if the field is not numeric.
    pub fn quantity(&self) -> Option<f64> {
        self.order_qty.trim().parse().ok()
    }

    /// Submission time parsed as ISO-8601; `None` on parse failure.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

/// Parse an ISO-8601 timestamp. Accepts an offset or `Z` suffix via RFC 3339;
/// timezone-less values (as written by `datetime.isoformat()`-style exporters)
/// are treated as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
