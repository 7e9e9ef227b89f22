#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A calendar unit index (week, month, quarter, semester, day) is
    /// outside of its valid bounds.  Values are never clamped.
    #[error("{unit} {value} is out of range {min}..={max}")]
    OutOfRange {
        unit: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("both periods must overlap")]
    MustOverlap,

    #[error("both periods must not abut")]
    Abuts,

    /// The date cannot be represented in the calendar
    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("unknown time zone: {0}")]
    UnknownTimezone(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Check that value is in [min, max], or report which unit was wrong.
pub(crate) fn validate_range(
    unit: &'static str,
    value: u32,
    min: u32,
    max: u32,
) -> Result<u32> {
    if value < min || value > max {
        log::debug!("rejecting {unit} {value}, expected {min}..={max}");
        return Err(Error::OutOfRange {
            unit,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
