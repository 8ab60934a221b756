use super::aggregate::HolidayTable;
use super::interval::DateInterval;
use crate::model::{ClosingEntry, WorkingDays};
use std::collections::BTreeMap;

/// Parcourt l'intervalle jour par jour.
///
/// A day whose weekday is not worked is ignored entirely, even when it is a
/// holiday: the calendar only lists closings that cost a working day.
pub(super) fn classify(
    interval: &DateInterval,
    working_days: &WorkingDays,
    table: &HolidayTable,
) -> (u64, BTreeMap<i64, ClosingEntry>) {
    let mut workdays = 0u64;
    let mut calendar = BTreeMap::new();

    for day in interval.days() {
        if !working_days.contains_date(day) {
            continue;
        }
        match table.get(&day) {
            Some(entry) => {
                calendar.insert(entry.timestamp, entry.clone());
            }
            None => workdays += 1,
        }
    }

    (workdays, calendar)
}
