//! Calendar-aware arithmetic.
//! Days and months are added in the local calendar, before any conversion
//! to an instant, so that "one month" is not a fixed number of seconds.

use crate::datepoints::{resolve_local, Datepoint};
use crate::errors::{Error, Result};
use chrono::{Days, Months, NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;

/// The first day of a month
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::InvalidDate(format!("{year}-{month:02}-01")))
}

/// Add calendar months to a date.  When the day does not exist in the
/// target month, it is clamped to the last day of that month (so that
/// January 31st + 1 month is February 28th or 29th).
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| Error::InvalidDate(format!("{date} + {months} months")))
}

/// Add calendar days to a date
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| Error::InvalidDate(format!("{date} + {days} days")))
}

/// The Monday that starts ISO week `week` of ISO year `year`.
/// ISO weeks belong to the year that contains their Thursday, so week 1
/// might start in December of the previous year.
/// Week 53 of a year that only has 52 weeks is week 53 of the next ISO
/// year that has one (there is always one within 7 years).
pub fn iso_week_monday(year: i32, week: u32) -> Result<NaiveDate> {
    let iso_year = if week == 53 {
        (year..=year.saturating_add(7))
            .find(|y| has_53_weeks(*y))
            .ok_or_else(|| Error::InvalidDate(format!("{year}-W53")))?
    } else {
        year
    };
    NaiveDate::from_isoywd_opt(iso_year, week, Weekday::Mon)
        .ok_or_else(|| Error::InvalidDate(format!("{iso_year}-W{week:02}")))
}

/// Move the Monday of an ISO week so that it falls on `first_day_of_week`
/// instead.  A week starting on Sunday starts the day before the Monday,
/// all other days are later in the same week.
#[must_use]
pub fn align_week_start(monday: NaiveDate, first_day_of_week: Weekday) -> NaiveDate {
    let shift = i64::from(first_day_of_week.num_days_from_sunday()) - 1;
    monday + chrono::TimeDelta::days(shift)
}

/// Midnight of the given local date, in the given zone
pub fn local_midnight(tz: &Tz, date: NaiveDate) -> Result<Datepoint> {
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// Whether the ISO year has 53 weeks
#[must_use]
pub fn has_53_weeks(year: i32) -> bool {
    NaiveDate::from_isoywd_opt(year, 53, Weekday::Mon).is_some()
}

/// The number of days in a month
pub fn days_in_month(year: i32, month: u32) -> Result<i64> {
    let first = first_of_month(year, month)?;
    let next = add_months(first, 1)?;
    Ok((next - first).num_days())
}
