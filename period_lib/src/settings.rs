use crate::errors::{Error, Result};
use chrono::Weekday;
use chrono_tz::Tz;

/// Configuration consulted by the calendar constructors of
/// [`crate::periods::Period`].
/// It is passed explicitly, so that two threads (or two tests) can use
/// different settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// The day displayed as the start of a week.  The week itself is always
    /// selected with ISO-8601 numbering.
    pub first_day_of_week: Weekday,

    /// Time zone in which calendar units (days, months,...) start at
    /// midnight.
    pub timezone: Tz,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: Weekday::Mon,
            timezone: chrono_tz::UTC,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn with_first_day_of_week(mut self, day: Weekday) -> Self {
        self.first_day_of_week = day;
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Same as [`Settings::with_timezone`], but the zone is given by its
    /// IANA name, e.g. "Europe/Paris".
    pub fn with_timezone_name(self, name: &str) -> Result<Self> {
        let timezone = name
            .parse::<Tz>()
            .map_err(|e| Error::UnknownTimezone(format!("{name}: {e}")))?;
        Ok(self.with_timezone(timezone))
    }
}
