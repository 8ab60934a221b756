use super::types::{EntryError, MissingField};
use super::util::closing_entry;
use crate::config::EngineConfig;
use crate::easter::{self, EasterError};
use crate::model::{ClosingEntry, ClosingType};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Table des jours de fermeture, une entrée par jour (la dernière insertion gagne).
pub(super) type HolidayTable = HashMap<NaiveDate, ClosingEntry>;

/// Merges public rules, Easter and custom closures, in that order.
///
/// Problems with single entries are pushed to `diagnostics` and the entry is
/// skipped.
pub(super) fn aggregate(
    years: &[i32],
    config: &EngineConfig,
    diagnostics: &mut Vec<EntryError>,
) -> HolidayTable {
    let mut table = HolidayTable::new();
    let mut add = |day: NaiveDate, event: &str, kind: ClosingType, options| {
        let entry = closing_entry(
            day,
            config.timezone,
            &config.output_format,
            event,
            kind,
            options,
        );
        table.insert(day, entry);
    };

    for (index, rule) in config.public_holidays.iter().enumerate() {
        let (Some(month_day), Some(event)) = (rule.month_day.as_deref(), rule.event.as_deref())
        else {
            let field = if rule.month_day.is_none() {
                MissingField::MonthDay
            } else {
                MissingField::Event
            };
            report(diagnostics, EntryError::MalformedPublicHoliday { index, field });
            continue;
        };
        for &year in years {
            match rule_date(year, month_day) {
                Some(day) => add(day, event, ClosingType::Public, rule.options.as_ref()),
                None => report(
                    diagnostics,
                    EntryError::InvalidMonthDay {
                        index,
                        year,
                        value: month_day.to_string(),
                    },
                ),
            }
        }
    }

    if config.calculate_easter {
        for &year in years {
            match easter::easter_dates(year) {
                Ok((sunday, monday)) => {
                    add(sunday, config.easter_names.sunday.as_str(), ClosingType::Public, None);
                    add(monday, config.easter_names.monday.as_str(), ClosingType::Public, None);
                }
                Err(EasterError::Unavailable(year)) => {
                    report(diagnostics, EntryError::EasterUnavailable { year })
                }
            }
        }
    }

    for (index, closure) in config.custom_closures.iter().enumerate() {
        let (Some(raw), Some(event)) = (closure.date.as_deref(), closure.event.as_deref()) else {
            let field = if closure.date.is_none() {
                MissingField::Date
            } else {
                MissingField::Event
            };
            report(diagnostics, EntryError::MalformedCustomClosure { index, field });
            continue;
        };
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(day) => add(day, event, ClosingType::Custom, closure.options.as_ref()),
            Err(_) => report(
                diagnostics,
                EntryError::InvalidClosureDate {
                    index,
                    value: raw.to_string(),
                },
            ),
        }
    }

    table
}

fn rule_date(year: i32, month_day: &str) -> Option<NaiveDate> {
    let (month, day) = month_day.trim().split_once('-')?;
    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
}

fn report(diagnostics: &mut Vec<EntryError>, err: EntryError) {
    tracing::warn!(error = %err, "skipping holiday entry");
    diagnostics.push(err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomClosure, PublicHolidayRule};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rules_apply_to_every_year() {
        let config = EngineConfig {
            public_holidays: vec![PublicHolidayRule::new("12-25", "Christmas")],
            calculate_easter: false,
            ..EngineConfig::default()
        };
        let mut diags = Vec::new();
        let table = aggregate(&[2020, 2021], &config, &mut diags);
        assert!(diags.is_empty());
        assert_eq!(table.len(), 2);
        assert_eq!(table[&date(2020, 12, 25)].event, "Christmas");
        assert_eq!(table[&date(2021, 12, 25)].date, "2021-12-25");
    }

    #[test]
    fn easter_overrides_rule_and_custom_overrides_both() {
        // 2011: Easter Monday falls on 25 April
        let config = EngineConfig {
            public_holidays: vec![PublicHolidayRule::new("04-25", "Liberation Day")],
            custom_closures: vec![CustomClosure::new("2011-04-24", "Inventory")],
            ..EngineConfig::default()
        };
        let mut diags = Vec::new();
        let table = aggregate(&[2011], &config, &mut diags);
        assert_eq!(table[&date(2011, 4, 25)].event, "Easter Monday");
        let sunday = &table[&date(2011, 4, 24)];
        assert_eq!(sunday.event, "Inventory");
        assert_eq!(sunday.kind, ClosingType::Custom);
    }

    #[test]
    fn easter_outside_date_range_is_reported_per_year() {
        let config = EngineConfig {
            public_holidays: Vec::new(),
            ..EngineConfig::default()
        };
        let mut diags = Vec::new();
        let table = aggregate(&[2021, 300_000], &config, &mut diags);
        assert_eq!(table.len(), 2);
        assert_eq!(diags, vec![EntryError::EasterUnavailable { year: 300_000 }]);
    }

    #[test]
    fn later_custom_closure_wins() {
        let config = EngineConfig {
            public_holidays: Vec::new(),
            calculate_easter: false,
            custom_closures: vec![
                CustomClosure::new("2021-03-01", "first"),
                CustomClosure::new("2021-03-01", "second"),
            ],
            ..EngineConfig::default()
        };
        let table = aggregate(&[2021], &config, &mut Vec::new());
        assert_eq!(table[&date(2021, 3, 1)].event, "second");
    }

    #[test]
    fn bad_entries_are_isolated() {
        let config = EngineConfig {
            public_holidays: vec![
                PublicHolidayRule {
                    month_day: Some("01-01".into()),
                    event: None,
                    options: None,
                },
                PublicHolidayRule::new("02-29", "Leap"),
                PublicHolidayRule::new("13-01", "Nope"),
                PublicHolidayRule::new("01-06", "Epiphany"),
            ],
            calculate_easter: false,
            custom_closures: vec![
                CustomClosure {
                    date: None,
                    event: Some("orphan".into()),
                    options: None,
                },
                CustomClosure::new("2021-31-01", "typo"),
                CustomClosure::new("2021-01-18", "Strike"),
            ],
            ..EngineConfig::default()
        };
        let mut diags = Vec::new();
        let table = aggregate(&[2020, 2021], &config, &mut diags);

        assert_eq!(
            diags,
            vec![
                EntryError::MalformedPublicHoliday {
                    index: 0,
                    field: MissingField::Event
                },
                EntryError::InvalidMonthDay {
                    index: 1,
                    year: 2021,
                    value: "02-29".into()
                },
                EntryError::InvalidMonthDay {
                    index: 2,
                    year: 2020,
                    value: "13-01".into()
                },
                EntryError::InvalidMonthDay {
                    index: 2,
                    year: 2021,
                    value: "13-01".into()
                },
                EntryError::MalformedCustomClosure {
                    index: 0,
                    field: MissingField::Date
                },
                EntryError::InvalidClosureDate {
                    index: 1,
                    value: "2021-31-01".into()
                },
            ]
        );
        assert!(table.contains_key(&date(2020, 2, 29)));
        assert!(table.contains_key(&date(2021, 1, 6)));
        assert!(table.contains_key(&date(2021, 1, 18)));
        assert!(!table.contains_key(&date(2021, 1, 1)));
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn options_and_format_flow_into_entries() {
        let config = EngineConfig {
            output_format: "%d/%m/%Y".into(),
            calculate_easter: false,
            ..EngineConfig::default()
        };
        let table = aggregate(&[2021], &config, &mut Vec::new());
        let new_year = &table[&date(2021, 1, 1)];
        assert_eq!(new_year.date, "01/01/2021");
        assert_eq!(new_year.timestamp, 1_609_459_200);
        assert!(new_year.options.is_some());
    }
}
