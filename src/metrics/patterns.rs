//! Trading-time distribution: hour-of-day and weekday histograms of filled
//! orders, with the most active period of each.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::models::TradingPatterns;

/// Weekday labels indexed by `Weekday::num_days_from_monday()`.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Build the time-distribution section from parsed fill timestamps.
///
/// Returns `None` when no timestamp parsed, in which case the whole section
/// is omitted from the profile.
pub fn time_patterns(timestamps: &[DateTime<Utc>]) -> Option<TradingPatterns> {
    if timestamps.is_empty() {
        return None;
    }

    let hours: Vec<u32> = timestamps.iter().map(|ts| ts.hour()).collect();
    let weekdays: Vec<u32> = timestamps
        .iter()
        .map(|ts| ts.weekday().num_days_from_monday())
        .collect();

    let hour_counts = count_in_order(&hours);
    let weekday_counts = count_in_order(&weekdays);

    let most_active_hour = mode(&hour_counts)?;
    let most_active_day = WEEKDAY_LABELS[mode(&weekday_counts)? as usize].to_string();

    Some(TradingPatterns {
        hour_distribution: hour_counts.iter().copied().collect(),
        weekday_distribution: weekday_counts.iter().copied().collect(),
        most_active_hour,
        most_active_day,
    })
}

/// Count values preserving first-encounter key order, so mode ties can break
/// toward the key seen first.
fn count_in_order(values: &[u32]) -> Vec<(u32, usize)> {
    let mut counts: Vec<(u32, usize)> = Vec::new();
    for &value in values {
        match counts.iter_mut().find(|(key, _)| *key == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

/// Key with the highest count; only a strictly greater count replaces the
/// current candidate, so the first-seen key wins ties.
fn mode(counts: &[(u32, usize)]) -> Option<u32> {
    let mut best: Option<(u32, usize)> = None;
    for &(key, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((key, count)),
        }
    }
    best.map(|(key, _)| key)
}
