use crate::model::{Options, PublicHolidayRule};
use serde_json::Value;

/// Jours fériés nationaux italiens (hors Pâques, calculée à part).
const ITALIAN_HOLIDAYS: &[(&str, &str)] = &[
    ("01-01", "New Year"),
    ("01-06", "Epiphany"),
    ("04-25", "Liberation Day"),
    ("05-01", "Labour Day"),
    ("06-02", "Republic Day"),
    ("08-15", "Assumption Day"),
    ("11-01", "All Saints' Day"),
    ("12-08", "Immaculate Conception"),
    ("12-25", "Christmas Day"),
    ("12-26", "St. Stephen's Day"),
];

/// Default rule set injected into every new configuration.
///
/// Each call returns a fresh value; callers replace or edit their own copy.
pub fn italian_public_holidays() -> Vec<PublicHolidayRule> {
    ITALIAN_HOLIDAYS
        .iter()
        .map(|(month_day, event)| {
            let rule = PublicHolidayRule::new(*month_day, *event);
            if *month_day == "01-01" {
                let mut options = Options::new();
                options.insert("htmlClass".to_string(), Value::from("blue"));
                rule.with_options(options)
            } else {
                rule
            }
        })
        .collect()
}
