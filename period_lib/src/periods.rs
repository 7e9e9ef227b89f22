use crate::calendars::{
    add_days, add_months, align_week_start, first_of_month, iso_week_monday,
    local_midnight,
};
use crate::datepoints::{compare, Datepoint};
use crate::errors::{validate_range, Result};
use crate::settings::Settings;
use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A contiguous range of time `[start, end)`: start is included, end is
/// excluded.
///
/// Nothing prevents building a period with `end < start` through its
/// public fields or its mutators, but all calendar constructors (and
/// [`Period::diff`]) return periods with `start <= end`.
///
/// The mutators (`add`, `sub`, `next`, `merge`,...) modify the period in
/// place.  Since `Period` is `Copy`, keep a copy first if you need the
/// original value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub start: Datepoint,
    pub end: Datepoint,
}

impl Period {
    #[must_use]
    pub fn new(start: Datepoint, end: Datepoint) -> Self {
        Period { start, end }
    }

    /// Create a period from two datepoints, in any order
    #[must_use]
    pub fn from_datepoints(date1: Datepoint, date2: Datepoint) -> Self {
        match compare(&date1, &date2) {
            Ordering::Greater => Period::new(date2, date1),
            Ordering::Less | Ordering::Equal => Period::new(date1, date2),
        }
    }

    /// The period between two local dates, from midnight to midnight
    fn from_local_dates(
        settings: &Settings,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        Ok(Period::new(
            local_midnight(&settings.timezone, start)?,
            local_midnight(&settings.timezone, end)?,
        ))
    }

    /// Create a period for a whole year, using default settings
    pub fn from_year(year: i32) -> Result<Self> {
        Period::from_year_with(&Settings::default(), year)
    }
    pub fn from_year_with(settings: &Settings, year: i32) -> Result<Self> {
        let start = first_of_month(year, 1)?;
        Period::from_local_dates(settings, start, add_months(start, 12)?)
    }

    /// Create a period for a semester (1 or 2), using default settings
    pub fn from_semester(year: i32, semester: u32) -> Result<Self> {
        Period::from_semester_with(&Settings::default(), year, semester)
    }
    pub fn from_semester_with(
        settings: &Settings,
        year: i32,
        semester: u32,
    ) -> Result<Self> {
        let semester = validate_range("semester", semester, 1, 2)?;
        let start = first_of_month(year, (semester - 1) * 6 + 1)?;
        Period::from_local_dates(settings, start, add_months(start, 6)?)
    }

    /// Create a period for a quarter (1 to 4), using default settings
    pub fn from_quarter(year: i32, quarter: u32) -> Result<Self> {
        Period::from_quarter_with(&Settings::default(), year, quarter)
    }
    pub fn from_quarter_with(
        settings: &Settings,
        year: i32,
        quarter: u32,
    ) -> Result<Self> {
        let quarter = validate_range("quarter", quarter, 1, 4)?;
        let start = first_of_month(year, (quarter - 1) * 3 + 1)?;
        Period::from_local_dates(settings, start, add_months(start, 3)?)
    }

    /// Create a period for a month (1 to 12), using default settings
    pub fn from_month(year: i32, month: u32) -> Result<Self> {
        Period::from_month_with(&Settings::default(), year, month)
    }
    pub fn from_month_with(
        settings: &Settings,
        year: i32,
        month: u32,
    ) -> Result<Self> {
        let month = validate_range("month", month, 1, 12)?;
        let start = first_of_month(year, month)?;
        Period::from_local_dates(settings, start, add_months(start, 1)?)
    }

    /// Create a period for a single day, using default settings.
    /// The day is only checked to be in 1..=31, so that February 30th is
    /// March 1st or 2nd.
    pub fn from_day(year: i32, month: u32, day: u32) -> Result<Self> {
        Period::from_day_with(&Settings::default(), year, month, day)
    }
    pub fn from_day_with(
        settings: &Settings,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Self> {
        let month = validate_range("month", month, 1, 12)?;
        let day = validate_range("day", day, 1, 31)?;
        let start = add_days(first_of_month(year, month)?, u64::from(day - 1))?;
        Period::from_local_dates(settings, start, add_days(start, 1)?)
    }

    /// Create a period for an ISO-8601 week (1 to 53), using default
    /// settings.
    pub fn from_week(year: i32, week: u32) -> Result<Self> {
        Period::from_week_with(&Settings::default(), year, week)
    }

    /// The week is selected with ISO numbering (weeks start on Monday, and
    /// belong to the year that contains their Thursday).  The start of the
    /// period is then moved to `settings.first_day_of_week`.
    /// Week 53 of a year that only has 52 ISO weeks is week 53 of the next
    /// ISO year that has one (2021-W53 is 2026-W53).
    pub fn from_week_with(
        settings: &Settings,
        year: i32,
        week: u32,
    ) -> Result<Self> {
        let week = validate_range("week", week, 1, 53)?;
        let monday = iso_week_monday(year, week)?;
        let start = align_week_start(monday, settings.first_day_of_week);
        log::debug!(
            "{year}-W{week:02}: monday={monday}, starts {start} ({})",
            settings.first_day_of_week
        );
        Period::from_local_dates(settings, start, add_days(start, 7)?)
    }

    /// Create a period that starts at `start` and lasts `duration`.
    /// A negative duration results in a period that ends before it starts;
    /// the datepoints are not swapped.
    ///
    /// # Panics
    ///
    /// When the end is outside of the range supported by chrono.
    #[must_use]
    pub fn from_duration(start: Datepoint, duration: TimeDelta) -> Self {
        Period::new(start, start + duration)
    }

    /// Create a period that ends at `end` and lasts `duration`.
    /// As for [`Period::from_duration`], a negative duration is kept as is.
    ///
    /// # Panics
    ///
    /// When the start is outside of the range supported by chrono.
    #[must_use]
    pub fn from_duration_before_end(end: Datepoint, duration: TimeDelta) -> Self {
        Period::new(end - duration, end)
    }

    pub fn starting_on(&mut self, start: Datepoint) {
        self.start = start;
    }

    pub fn ending_on(&mut self, end: Datepoint) {
        self.end = end;
    }

    /// Change the end so that the period lasts `duration`
    pub fn with_duration(&mut self, duration: TimeDelta) {
        self.end = self.start + duration;
    }

    /// Move the end later by `duration`
    pub fn add(&mut self, duration: TimeDelta) {
        self.end += duration;
    }

    /// Move the end earlier by `duration`
    pub fn sub(&mut self, duration: TimeDelta) {
        self.end -= duration;
    }

    /// Move to the adjacent period of the same duration, just after self
    pub fn next(&mut self) {
        let duration = self.duration();
        self.start = self.end;
        self.end += duration;
    }

    /// Move to the adjacent period of the same duration, just before self
    pub fn previous(&mut self) {
        let duration = self.duration();
        self.end = self.start;
        self.start -= duration;
    }

    /// The signed duration `end - start`
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// Despite its name, this compares the end of the two periods, not
    /// their durations.  Two periods with the same duration but different
    /// ends do not compare equal.
    #[must_use]
    pub fn compare_duration(&self, other: &Period) -> Ordering {
        compare(&self.end, &other.end)
    }

    /// Whether self ends after other.  See [`Period::compare_duration`].
    #[must_use]
    pub fn duration_greater_than(&self, other: &Period) -> bool {
        self.compare_duration(other) == Ordering::Greater
    }

    /// Whether self ends before other.  See [`Period::compare_duration`].
    #[must_use]
    pub fn duration_less_than(&self, other: &Period) -> bool {
        self.compare_duration(other) == Ordering::Less
    }

    /// Whether both periods end at the same time.
    /// See [`Period::compare_duration`].
    #[must_use]
    pub fn same_duration_as(&self, other: &Period) -> bool {
        self.compare_duration(other) == Ordering::Equal
    }

    /// `self.duration() - other.duration()`
    #[must_use]
    pub fn duration_diff(&self, other: &Period) -> TimeDelta {
        self.duration() - other.duration()
    }

    /// Same as [`Period::duration_diff`], in nanoseconds
    #[must_use]
    pub fn timestamp_duration_diff(&self, other: &Period) -> i128 {
        nanoseconds(self.duration()) - nanoseconds(other.duration())
    }
}

fn nanoseconds(duration: TimeDelta) -> i128 {
    i128::from(duration.num_seconds()) * 1_000_000_000
        + i128::from(duration.subsec_nanos())
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}
