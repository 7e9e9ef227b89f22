use crate::errors::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, TimeZone};
use chrono_tz::Tz;
use std::cmp::Ordering;

/// One end of a period: an instant with nanosecond resolution, together
/// with the offset it was expressed in.
pub type Datepoint = DateTime<FixedOffset>;

/// Compare two datepoints, including sub-second precision.
/// Only the instants matter, not the offsets they are expressed in.
/// All predicates on periods go through this function.
#[must_use]
pub fn compare(date1: &Datepoint, date2: &Datepoint) -> Ordering {
    date1.cmp(date2)
}

/// The earliest of the two datepoints (the first one if they are equal)
pub(crate) fn earliest(date1: Datepoint, date2: Datepoint) -> Datepoint {
    match compare(&date1, &date2) {
        Ordering::Greater => date2,
        Ordering::Less | Ordering::Equal => date1,
    }
}

/// The latest of the two datepoints (the first one if they are equal)
pub(crate) fn latest(date1: Datepoint, date2: Datepoint) -> Datepoint {
    match compare(&date1, &date2) {
        Ordering::Less => date2,
        Ordering::Greater | Ordering::Equal => date1,
    }
}

/// Convert a local wall-clock time in the given zone to an instant.
/// Ambiguous local times (end of daylight saving) resolve to the earliest
/// instant.  Local times that fall in a gap are interpreted with the offset
/// in effect just before the gap, so they end up after the transition.
pub(crate) fn resolve_local(tz: &Tz, local: NaiveDateTime) -> Result<Datepoint> {
    if let Some(dt) = tz.from_local_datetime(&local).earliest() {
        return Ok(dt.fixed_offset());
    }

    let invalid = || Error::InvalidDate(format!("{local} in {}", tz.name()));
    let before = local
        .checked_sub_signed(TimeDelta::days(1))
        .and_then(|b| tz.from_local_datetime(&b).earliest())
        .ok_or_else(invalid)?
        .fixed_offset();
    let utc = local
        .checked_sub_signed(TimeDelta::seconds(i64::from(
            before.offset().local_minus_utc(),
        )))
        .ok_or_else(invalid)?;
    log::debug!("{local} does not exist in {}, using {utc} UTC", tz.name());
    Ok(tz.from_utc_datetime(&utc).fixed_offset())
}
