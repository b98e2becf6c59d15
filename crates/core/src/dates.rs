//! Human-readable rendering of epoch-millisecond timestamps.

use chrono::{TimeZone, Utc};

use crate::types::EpochMillis;

/// Placeholder shown when a timestamp is missing or out of range.
pub const MISSING_DATE: &str = "-";

/// Format an epoch-millisecond timestamp as `dd/mm/YYYY` (UTC).
pub fn format_day(millis: Option<EpochMillis>) -> String {
    millis
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| MISSING_DATE.to_string())
}
