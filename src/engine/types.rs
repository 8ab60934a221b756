use thiserror::Error;

/// Erreurs fatales de configuration : le moteur ne peut pas être utilisé.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid date {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid weekday identifier {0} (must be 0=Sunday..6=Saturday)")]
    InvalidWeekday(u8),
    #[error("invalid output format: {0:?}")]
    InvalidOutputFormat(String),
    #[error("unknown time zone: {0}")]
    InvalidTimezone(String),
}

/// Champ obligatoire absent d'une entrée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    MonthDay,
    Date,
    Event,
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MissingField::MonthDay => "month_day",
            MissingField::Date => "date",
            MissingField::Event => "event",
        })
    }
}

/// Entry-level problem found while aggregating holidays.
///
/// The offending entry (or Easter year) is skipped; the rest of the
/// aggregation carries on and the problem is kept in the engine diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("malformed public holiday #{index}: missing {field}")]
    MalformedPublicHoliday { index: usize, field: MissingField },
    #[error("malformed custom closure #{index}: missing {field}")]
    MalformedCustomClosure { index: usize, field: MissingField },
    #[error("public holiday #{index}: {value:?} is not a valid month-day in {year}")]
    InvalidMonthDay {
        index: usize,
        year: i32,
        value: String,
    },
    #[error("custom closure #{index}: invalid date {value:?}")]
    InvalidClosureDate { index: usize, value: String },
    #[error("easter dates unavailable for {year}: outside the supported date range")]
    EasterUnavailable { year: i32 },
}
