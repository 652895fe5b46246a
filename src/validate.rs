//! Range and month-length predicates for both calendars.
//!
//! The `is_valid_*` predicates are total and never fail. The `ensure_*`
//! helpers back the fail-fast `(year, month, day)` entry points.

use crate::config::YearRange;
use crate::types::{GregorianDate, ShamsiDate};
use crate::CalendarError;

/// True iff `1 <= year <= 3000`, `1 <= month <= 12` and the day fits the
/// leap-aware Shamsi month length.
pub fn is_valid_shamsi_date(year: i32, month: u8, day: u8) -> bool {
    YearRange::DEFAULT.contains(year) && ShamsiDate::new(year, month, day).is_ok()
}

/// True iff `1 <= year <= 3000`, `1 <= month <= 12` and the day fits the
/// leap-aware Gregorian month length.
pub fn is_valid_gregorian_date(year: i32, month: u8, day: u8) -> bool {
    YearRange::DEFAULT.contains(year) && GregorianDate::new(year, month, day).is_ok()
}

pub(crate) fn ensure_valid_shamsi_date(
    year: i32,
    month: u8,
    day: u8,
) -> Result<ShamsiDate, CalendarError> {
    let date = ShamsiDate::new(year, month, day).inspect_err(|err| {
        tracing::debug!(year, month, day, %err, "rejected Shamsi date");
    })?;
    YearRange::DEFAULT.check(year)?;
    Ok(date)
}

pub(crate) fn ensure_valid_gregorian_date(
    year: i32,
    month: u8,
    day: u8,
) -> Result<GregorianDate, CalendarError> {
    let date = GregorianDate::new(year, month, day).inspect_err(|err| {
        tracing::debug!(year, month, day, %err, "rejected Gregorian date");
    })?;
    YearRange::DEFAULT.check(year)?;
    Ok(date)
}
