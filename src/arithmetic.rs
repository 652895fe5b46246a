use crate::CalendarError;
use crate::month::shamsi_month_length_unchecked;
use crate::types::{ShamsiDate, Weekday};
use crate::validate::ensure_valid_shamsi_date;
use std::cmp::Ordering;

impl ShamsiDate {
    /// Returns the date `days` after this one (before it if negative).
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the result cannot be represented.
    pub fn add_days(&self, days: i64) -> Result<Self, CalendarError> {
        Self::from_julian_day(self.to_julian_day().checked_add_days(days)?)
    }

    /// Absolute number of days between two dates
    pub fn days_between(&self, other: &Self) -> u64 {
        self.to_julian_day().abs_diff(other.to_julian_day())
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    pub fn is_same_date(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns true if this date falls on the weekend (Friday)
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }
}

/// Day of week of a Shamsi (year, month, day): `((jd + 2) mod 7) + 1`.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for a malformed date and
/// `CalendarError::PolicyRangeExceeded` for a year outside the default range.
pub fn shamsi_day_of_week(year: i32, month: u8, day: u8) -> Result<Weekday, CalendarError> {
    Ok(ensure_valid_shamsi_date(year, month, day)?.weekday())
}

/// Returns `date` moved by `days`; the result is always a valid date.
///
/// # Errors
/// Returns `CalendarError::JulianDayOutOfRange` if the result cannot be represented.
pub fn add_days_to_shamsi_date(date: ShamsiDate, days: i64) -> Result<ShamsiDate, CalendarError> {
    date.add_days(days)
}

/// Absolute day distance between two dates; symmetric and never negative.
pub fn days_between_shamsi_dates(a: ShamsiDate, b: ShamsiDate) -> u64 {
    a.days_between(&b)
}

/// Lexicographic comparison on (year, month, day).
///
/// `compare_shamsi_dates(a, b) as i8` gives the -1/0/1 form.
pub fn compare_shamsi_dates(a: ShamsiDate, b: ShamsiDate) -> Ordering {
    a.cmp(&b)
}

pub fn is_before(a: ShamsiDate, b: ShamsiDate) -> bool {
    compare_shamsi_dates(a, b).is_lt()
}

pub fn is_after(a: ShamsiDate, b: ShamsiDate) -> bool {
    compare_shamsi_dates(a, b).is_gt()
}

pub fn is_same_date(a: ShamsiDate, b: ShamsiDate) -> bool {
    compare_shamsi_dates(a, b).is_eq()
}

/// Returns true if the Shamsi (year, month, day) falls on the weekend.
///
/// # Errors
/// Fails like [`shamsi_day_of_week`].
pub fn is_weekend(year: i32, month: u8, day: u8) -> Result<bool, CalendarError> {
    Ok(shamsi_day_of_week(year, month, day)?.is_weekend())
}

/// Weekday of the first day of a Shamsi month.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for a month outside 1-12 and
/// `CalendarError::PolicyRangeExceeded` for a year outside the default range.
pub fn first_weekday_of_month(year: i32, month: u8) -> Result<Weekday, CalendarError> {
    shamsi_day_of_week(year, month, 1)
}

/// Weekday of the last day of a Shamsi month.
///
/// # Errors
/// Fails like [`first_weekday_of_month`].
pub fn last_weekday_of_month(year: i32, month: u8) -> Result<Weekday, CalendarError> {
    let first = ensure_valid_shamsi_date(year, month, 1)?;
    let last = ShamsiDate::from_parts_unchecked(
        year,
        month,
        shamsi_month_length_unchecked(month, first.is_leap_year()),
    );
    Ok(last.weekday())
}
