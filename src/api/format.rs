//! Timestamp rendering for stored-procedure columns.

use chrono::NaiveDateTime;
use serde::Serializer;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `YYYY-MM-DD HH:MM:SS`, or `null` for a missing timestamp.
pub fn datetime<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
    with_format(value, TIMESTAMP_FORMAT, serializer)
}

/// `YYYY-MM-DDTHH:MM:SS`; only the per-cashier transaction listing uses it.
pub fn datetime_iso<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
    with_format(value, ISO_TIMESTAMP_FORMAT, serializer)
}

fn with_format<S: Serializer>(value: &Option<NaiveDateTime>, format: &str, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(dt) => serializer.collect_str(&dt.format(format)),
        None => serializer.serialize_none(),
    }
}
