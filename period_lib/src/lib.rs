//! Contiguous ranges of time, `[start, end)`.
//!
//! A [`Period`] is built from calendar units (year, semester, quarter,
//! month, ISO week, day) or from a datepoint and a duration, then compared
//! to other periods (overlap, abut, contain) or combined with them (merge,
//! intersect, gap, diff).
//!
//! Calendar units start at midnight in the time zone given by
//! [`Settings`], which also selects the first day of the week.

pub mod calendars;
pub mod datepoints;
pub mod errors;
pub mod periods;
pub mod relations;
pub mod settings;

pub use crate::datepoints::{compare, Datepoint};
pub use crate::errors::{Error, Result};
pub use crate::periods::Period;
pub use crate::relations::Side;
pub use crate::settings::Settings;
