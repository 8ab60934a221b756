use crate::engine::{util, EngineError};
use crate::holidays::italian_public_holidays;
use crate::model::{CustomClosure, EasterNames, PublicHolidayRule, WorkingDays};
use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Paramétrage complet d'un calcul de jours ouvrés.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Worked weekdays, 0 = Sunday .. 6 = Saturday.
    pub working_days: WorkingDays,
    /// strftime pattern for `ClosingEntry::date`.
    pub output_format: String,
    pub calculate_easter: bool,
    pub easter_names: EasterNames,
    /// Zone used to compute each day's midnight timestamp.
    pub timezone: Tz,
    pub public_holidays: Vec<PublicHolidayRule>,
    pub custom_closures: Vec<CustomClosure>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            working_days: WorkingDays::default(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            calculate_easter: true,
            easter_names: EasterNames::default(),
            timezone: Tz::UTC,
            public_holidays: italian_public_holidays(),
            custom_closures: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !util::is_valid_format(&self.output_format) {
            return Err(EngineError::InvalidOutputFormat(self.output_format.clone()));
        }
        Ok(())
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, EngineError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| EngineError::InvalidTimezone(name.to_string()))
}

pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: EngineConfig = serde_json::from_slice(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn export_config_json<P: AsRef<Path>>(path: P, config: &EngineConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
