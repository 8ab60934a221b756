use crate::engine::EngineError;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Free-form options attached to a holiday and passed through to the output as is.
pub type Options = Map<String, Value>;

/// Jours travaillés de la semaine.
///
/// Weekday identifiers follow the **0 = Sunday .. 6 = Saturday** convention,
/// so the default Monday-to-Friday pattern is `{1, 2, 3, 4, 5}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WorkingDays(BTreeSet<u8>);

impl WorkingDays {
    /// Builds a pattern from weekday identifiers (0 = Sunday .. 6 = Saturday).
    pub fn new<I: IntoIterator<Item = u8>>(days: I) -> Result<Self, EngineError> {
        let mut set = BTreeSet::new();
        for day in days {
            if day > 6 {
                return Err(EngineError::InvalidWeekday(day));
            }
            set.insert(day);
        }
        Ok(Self(set))
    }

    pub fn from_weekdays<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        Self(days.into_iter().map(weekday_id).collect())
    }

    /// Every day of the week: the calendar then reports every closing day.
    pub fn all() -> Self {
        Self((0..=6).collect())
    }

    pub fn contains(&self, id: u8) -> bool {
        self.0.contains(&id)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains(weekday_id(date.weekday()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl Default for WorkingDays {
    fn default() -> Self {
        Self((1..=5).collect())
    }
}

impl TryFrom<Vec<u8>> for WorkingDays {
    type Error = EngineError;

    fn try_from(days: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<WorkingDays> for Vec<u8> {
    fn from(days: WorkingDays) -> Self {
        days.0.into_iter().collect()
    }
}

/// Weekday identifier, 0 = Sunday .. 6 = Saturday.
pub fn weekday_id(day: Weekday) -> u8 {
    day.num_days_from_sunday() as u8
}

/// Jour férié récurrent (`MM-DD`), appliqué à chaque année de l'intervalle.
///
/// Both `month_day` and `event` are required; they are optional here only so
/// that an incomplete entry coming from a file can be reported and skipped
/// instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PublicHolidayRule {
    #[serde(default, alias = "m-d")]
    pub month_day: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

impl PublicHolidayRule {
    pub fn new<M: Into<String>, E: Into<String>>(month_day: M, event: E) -> Self {
        Self {
            month_day: Some(month_day.into()),
            event: Some(event.into()),
            options: None,
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }
}

/// Fermeture ponctuelle (`YYYY-MM-DD`) fournie par l'appelant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomClosure {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

impl CustomClosure {
    pub fn new<D: Into<String>, E: Into<String>>(date: D, event: E) -> Self {
        Self {
            date: Some(date.into()),
            event: Some(event.into()),
            options: None,
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }
}

/// Origine d'un jour de fermeture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosingType {
    Public,
    Custom,
}

impl ClosingType {
    pub fn as_str(self) -> &'static str {
        match self {
            ClosingType::Public => "public",
            ClosingType::Custom => "custom",
        }
    }
}

/// Noms des deux jours de Pâques ajoutés au calendrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasterNames {
    pub sunday: String,
    pub monday: String,
}

impl Default for EasterNames {
    fn default() -> Self {
        Self {
            sunday: "Easter".to_string(),
            monday: "Easter Monday".to_string(),
        }
    }
}

/// Un jour de fermeture, tel que restitué dans le calendrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosingEntry {
    /// Seconds since epoch of the day's local midnight.
    pub timestamp: i64,
    pub day: NaiveDate,
    /// `day` rendered with the configured output format.
    pub date: String,
    pub event: String,
    #[serde(rename = "type")]
    pub kind: ClosingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}
