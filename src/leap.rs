//! Leap-year rules for both calendars.
//!
//! Both predicates are total over `i32`. Cycle positions use Euclidean
//! remainders, so `year.rem_euclid(33)` is always in `0..33` and years
//! before 1 continue the same 33-year pattern backwards.

use crate::config::YearRange;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    SHAMSI_CYCLE_YEARS, SHAMSI_LEAP_BREAK_POINTS,
};
use crate::CalendarError;

/// Returns true if `position` (a year's remainder mod 33) is a leap break-point.
pub(crate) const fn is_leap_position(position: i32) -> bool {
    let mut i = 0;
    while i < SHAMSI_LEAP_BREAK_POINTS.len() {
        if SHAMSI_LEAP_BREAK_POINTS[i] == position {
            return true;
        }
        i += 1;
    }
    false
}

/// Shamsi leap year under the 33-year intercalation cycle.
pub const fn is_shamsi_leap_year(year: i32) -> bool {
    is_leap_position(year.rem_euclid(SHAMSI_CYCLE_YEARS))
}

/// Gregorian leap year: divisible by 4 and not by 100, or divisible by 400.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_shamsi_year(year: i32) -> u16 {
    if is_shamsi_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

pub const fn days_in_gregorian_year(year: i32) -> u16 {
    if is_gregorian_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Shamsi leap years in `start..=end`, in ascending order.
/// Returns an empty list when `start > end`.
///
/// # Errors
/// Returns `CalendarError::PolicyRangeExceeded` if either bound is outside the default range.
pub fn shamsi_leap_years_in_range(start: i32, end: i32) -> Result<Vec<i32>, CalendarError> {
    YearRange::DEFAULT.check(start)?;
    YearRange::DEFAULT.check(end)?;
    Ok((start..=end).filter(|&y| is_shamsi_leap_year(y)).collect())
}
