//! Epoch timestamp rendering.
//!
//! Digitransit reports leg times as milliseconds since the Unix epoch.
//! Rendering them as a wall-clock time needs a time zone, which callers
//! pass explicitly so output is deterministic under test.

use std::fmt;

use chrono::TimeZone;

/// Error returned when a timestamp cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {epoch_ms} ms")]
pub struct TimeError {
    epoch_ms: i64,
}

impl TimeError {
    fn new(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }
}

/// Format an epoch-millisecond timestamp in `tz` with a strftime `pattern`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use transit_board::domain::format_epoch_ms;
///
/// // 2024-03-15 08:05:09 UTC
/// let ms = 1_710_489_909_000;
/// assert_eq!(format_epoch_ms(ms, &Utc, "%H:%M:%S").unwrap(), "08:05:09");
/// assert_eq!(format_epoch_ms(ms, &Utc, "%H:%M").unwrap(), "08:05");
/// ```
pub fn format_epoch_ms<Tz>(epoch_ms: i64, tz: &Tz, pattern: &str) -> Result<String, TimeError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let at = tz
        .timestamp_millis_opt(epoch_ms)
        .single()
        .ok_or_else(|| TimeError::new(epoch_ms))?;
    Ok(at.format(pattern).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn formats_in_requested_zone() {
        let ms = 1_710_489_909_000; // 08:05:09 UTC
        let helsinki = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(format_epoch_ms(ms, &Utc, "%H:%M:%S").unwrap(), "08:05:09");
        assert_eq!(
            format_epoch_ms(ms, &helsinki, "%H:%M:%S").unwrap(),
            "10:05:09"
        );
    }

    #[test]
    fn sub_second_part_is_dropped() {
        let ms = 1_710_489_909_999;
        assert_eq!(format_epoch_ms(ms, &Utc, "%H:%M:%S").unwrap(), "08:05:09");
    }

    #[test]
    fn out_of_range_timestamp() {
        let err = format_epoch_ms(i64::MAX, &Utc, "%H:%M").unwrap_err();
        assert_eq!(err.to_string(), format!("invalid timestamp: {} ms", i64::MAX));
    }
}
