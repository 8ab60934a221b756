#![forbid(unsafe_code)]
//! Workday calendar — jours ouvrés et jours de fermeture sur un intervalle.
//!
//! - Jours fériés récurrents (`MM-DD`), Pâques et lundi de Pâques calculés.
//! - Fermetures ponctuelles fournies par l'appelant (prioritaires).
//! - Semaine de travail configurable (0 = dimanche .. 6 = samedi).
//! - Calcul paresseux, exécuté une seule fois par moteur.

pub mod config;
pub mod easter;
pub mod engine;
pub mod holidays;
pub mod io;
pub mod model;

pub use config::{load_config_from_file, EngineConfig};
pub use easter::{easter_dates, easter_monday, easter_sunday, EasterError};
pub use engine::{DateInterval, EngineError, EntryError, MissingField, WorkdayEngine};
pub use holidays::italian_public_holidays;
pub use model::{
    ClosingEntry, ClosingType, CustomClosure, EasterNames, Options, PublicHolidayRule, WorkingDays,
};
