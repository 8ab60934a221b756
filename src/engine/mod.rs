mod aggregate;
mod classify;
mod interval;
mod types;
pub(crate) mod util;

pub use interval::DateInterval;
pub use types::{EngineError, EntryError, MissingField};

use crate::config::EngineConfig;
use crate::model::{ClosingEntry, CustomClosure, EasterNames, PublicHolidayRule, WorkingDays};
use chrono::NaiveDate;
use chrono_tz::Tz;
use std::cell::OnceCell;
use std::collections::BTreeMap;

/// Résultat d'un calcul, figé après le premier accès.
#[derive(Debug, Clone, Default)]
struct Outcome {
    workdays: u64,
    calendar: BTreeMap<i64, ClosingEntry>,
    diagnostics: Vec<EntryError>,
}

/// Moteur de calcul des jours ouvrés pour un intervalle donné.
///
/// Configuration is read once, on the first call to [`workday_count`],
/// [`calendar`] or [`diagnostics`]; the outcome is then cached for the life
/// of the engine. Setters called after that point are ignored. Build a new
/// engine to compute again.
///
/// [`workday_count`]: WorkdayEngine::workday_count
/// [`calendar`]: WorkdayEngine::calendar
/// [`diagnostics`]: WorkdayEngine::diagnostics
#[derive(Debug)]
pub struct WorkdayEngine {
    interval: DateInterval,
    years: Vec<i32>,
    config: EngineConfig,
    outcome: OnceCell<Outcome>,
}

impl WorkdayEngine {
    /// Parse les deux bornes et prépare le moteur avec la configuration par défaut.
    pub fn new(start: &str, end: &str) -> Result<Self, EngineError> {
        let interval = DateInterval::parse(start, end)?;
        Ok(Self::build(interval, EngineConfig::default()))
    }

    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::build(DateInterval::new(start, end), EngineConfig::default())
    }

    pub fn with_config(interval: DateInterval, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::build(interval, config))
    }

    fn build(interval: DateInterval, config: EngineConfig) -> Self {
        if interval.is_inverted() {
            tracing::warn!(
                start = %interval.start,
                end = %interval.end,
                "end date before start date; nothing to count"
            );
        }
        Self {
            years: interval.years(),
            interval,
            config,
            outcome: OnceCell::new(),
        }
    }

    pub fn interval(&self) -> &DateInterval {
        &self.interval
    }

    /// Années couvertes par l'intervalle.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn has_run(&self) -> bool {
        self.outcome.get().is_some()
    }

    pub fn set_working_days(&mut self, days: WorkingDays) {
        if self.accepts_changes("working_days") {
            self.config.working_days = days;
        }
    }

    /// strftime pattern used for `ClosingEntry::date` (default `%Y-%m-%d`).
    pub fn set_output_format(&mut self, format: &str) -> Result<(), EngineError> {
        if !util::is_valid_format(format) {
            return Err(EngineError::InvalidOutputFormat(format.to_string()));
        }
        if self.accepts_changes("output_format") {
            self.config.output_format = format.to_string();
        }
        Ok(())
    }

    pub fn set_calculate_easter(&mut self, enabled: bool) {
        if self.accepts_changes("calculate_easter") {
            self.config.calculate_easter = enabled;
        }
    }

    pub fn set_easter_names(&mut self, names: EasterNames) {
        if self.accepts_changes("easter_names") {
            self.config.easter_names = names;
        }
    }

    pub fn set_timezone(&mut self, tz: Tz) {
        if self.accepts_changes("timezone") {
            self.config.timezone = tz;
        }
    }

    pub fn set_public_holidays(&mut self, rules: Vec<PublicHolidayRule>) {
        if self.accepts_changes("public_holidays") {
            self.config.public_holidays = rules;
        }
    }

    pub fn set_custom_closures(&mut self, closures: Vec<CustomClosure>) {
        if self.accepts_changes("custom_closures") {
            self.config.custom_closures = closures;
        }
    }

    fn accepts_changes(&self, setting: &str) -> bool {
        if self.has_run() {
            tracing::warn!(setting, "engine already computed; change ignored");
            return false;
        }
        true
    }

    /// Nombre de jours travaillés (hors fermetures) dans l'intervalle.
    pub fn workday_count(&self) -> u64 {
        self.outcome().workdays
    }

    /// Closing days that fall on a worked weekday, keyed by midnight timestamp.
    pub fn calendar(&self) -> &BTreeMap<i64, ClosingEntry> {
        &self.outcome().calendar
    }

    /// Entries skipped during aggregation, in the order they were met.
    pub fn diagnostics(&self) -> &[EntryError] {
        &self.outcome().diagnostics
    }

    fn outcome(&self) -> &Outcome {
        self.outcome.get_or_init(|| self.run())
    }

    fn run(&self) -> Outcome {
        let mut diagnostics = Vec::new();
        let table = aggregate::aggregate(&self.years, &self.config, &mut diagnostics);
        let (workdays, calendar) =
            classify::classify(&self.interval, &self.config.working_days, &table);
        tracing::debug!(
            start = %self.interval.start,
            end = %self.interval.end,
            holidays = table.len(),
            workdays,
            closings = calendar.len(),
            skipped = diagnostics.len(),
            "workday calendar computed"
        );
        Outcome {
            workdays,
            calendar,
            diagnostics,
        }
    }
}
