//! Calcul de Pâques grégorienne (algorithme de Meeus/Jones/Butcher).
//!
//! Valid for any year the Gregorian reckoning is applied to; the only limit is
//! the range of years `chrono::NaiveDate` can represent.

use chrono::{Duration, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EasterError {
    #[error("easter date unavailable for year {0}: outside the supported date range")]
    Unavailable(i32),
}

/// Dimanche de Pâques pour `year`.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, EasterError> {
    let (month, day) = easter_month_day(i64::from(year));
    NaiveDate::from_ymd_opt(year, month, day).ok_or(EasterError::Unavailable(year))
}

/// Lundi de Pâques (dimanche + 1 jour).
pub fn easter_monday(year: i32) -> Result<NaiveDate, EasterError> {
    easter_sunday(year)?
        .checked_add_signed(Duration::days(1))
        .ok_or(EasterError::Unavailable(year))
}

/// Both Easter days for `year`, Sunday first.
pub fn easter_dates(year: i32) -> Result<(NaiveDate, NaiveDate), EasterError> {
    Ok((easter_sunday(year)?, easter_monday(year)?))
}

fn easter_month_day(y: i64) -> (u32, u32) {
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;
    // n / 31 is 3 or 4, n % 31 + 1 is 1..=31
    ((n / 31) as u32, (n % 31 + 1) as u32)
}
