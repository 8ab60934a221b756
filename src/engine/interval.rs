use super::EngineError;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Intervalle de dates [start, end], bornes incluses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse deux dates `YYYY-MM-DD` (ou RFC3339, seule la date est retenue).
    pub fn parse(start: &str, end: &str) -> Result<Self, EngineError> {
        Ok(Self {
            start: parse_day(start)?,
            end: parse_day(end)?,
        })
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Every calendar year touched by the interval, ascending. Empty when inverted.
    pub fn years(&self) -> Vec<i32> {
        use chrono::Datelike;
        if self.is_inverted() {
            return Vec::new();
        }
        (self.start.year()..=self.end.year()).collect()
    }

    /// Each day from start to end, once, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    pub fn len_days(&self) -> u64 {
        if self.is_inverted() {
            0
        } else {
            (self.end - self.start).num_days() as u64 + 1
        }
    }
}

pub(crate) fn parse_day(raw: &str) -> Result<NaiveDate, EngineError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|err| {
            DateTime::<FixedOffset>::parse_from_rfc3339(raw)
                .map(|dt| dt.date_naive())
                .map_err(|_| err)
        })
        .map_err(|source| EngineError::InvalidDate {
            input: raw.to_string(),
            source,
        })
}
