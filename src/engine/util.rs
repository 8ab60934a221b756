use crate::model::{ClosingEntry, ClosingType, Options};
use chrono::format::{Item, StrftimeItems};
use chrono::{Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Seconds since epoch of the first instant of `day` in `tz`.
///
/// Midnight normally; the first hour that exists when a DST jump swallows it.
pub(crate) fn day_timestamp(day: NaiveDate, tz: Tz) -> i64 {
    let midnight = day.and_time(NaiveTime::MIN);
    (0..=2)
        .find_map(|h| {
            tz.from_local_datetime(&(midnight + Duration::hours(h)))
                .earliest()
        })
        .map(|dt| dt.timestamp())
        // unreachable for IANA zones: no transition skips three hours
        .unwrap_or_else(|| midnight.and_utc().timestamp())
}

pub(crate) fn is_valid_format(fmt: &str) -> bool {
    !fmt.is_empty() && !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

pub(super) fn closing_entry(
    day: NaiveDate,
    tz: Tz,
    output_format: &str,
    event: &str,
    kind: ClosingType,
    options: Option<&Options>,
) -> ClosingEntry {
    ClosingEntry {
        timestamp: day_timestamp(day, tz),
        day,
        date: day.format(output_format).to_string(),
        event: event.to_string(),
        kind,
        options: options.cloned(),
    }
}
