//! Shamsi dates to and from Julian Day Numbers.
//!
//! Forward: `epoch + days before the year + days before the month + (day - 1)`,
//! where the leap days before a year are 8 per full 33-year cycle plus the
//! break-points reached in the partial cycle.
//!
//! Inverse: estimate the cycle by floor division, then walk forward one year
//! at a time. The walk consumes a year only while the remaining day count is
//! at least that year's length, which is exactly the set of days the forward
//! direction places before the year. The estimate is always the true cycle
//! start, so the walk takes at most 33 steps.

use crate::consts::{
    DAYS_IN_COMMON_YEAR, HAMAL, SHAMSI_CYCLE_YEARS, SHAMSI_DAYS_PER_CYCLE, SHAMSI_EPOCH,
    SHAMSI_FIRST_HALF_DAYS, SHAMSI_LAST_LONG_MONTH, SHAMSI_LEAP_BREAK_POINTS,
    SHAMSI_LEAP_DAYS_PER_CYCLE,
};
use crate::julian::{check_magnitude, narrow_year, JulianDay};
use crate::leap::is_leap_position;
use crate::types::{GregorianDate, ShamsiDate, Weekday};
use crate::validate::ensure_valid_shamsi_date;
use crate::CalendarError;

const _: () = assert!(
    SHAMSI_DAYS_PER_CYCLE
        == SHAMSI_CYCLE_YEARS as i64 * DAYS_IN_COMMON_YEAR as i64 + SHAMSI_LEAP_DAYS_PER_CYCLE
);

const CYCLE_YEARS: i64 = SHAMSI_CYCLE_YEARS as i64;
const LONG_MONTH_DAYS: i64 = 31;
const SHORT_MONTH_DAYS: i64 = 30;

/// Days in Shamsi `year`, for years held as `i64` during the walk.
const fn year_length(year: i64) -> i64 {
    // rem_euclid(33) is in 0..33, so the narrowing is lossless
    if is_leap_position(year.rem_euclid(CYCLE_YEARS) as i32) {
        DAYS_IN_COMMON_YEAR as i64 + 1
    } else {
        DAYS_IN_COMMON_YEAR as i64
    }
}

/// Days from the epoch to the first day of `year`.
fn days_before_year(year: i64) -> i64 {
    let elapsed = year - 1;
    let cycles = elapsed.div_euclid(CYCLE_YEARS);
    let remainder = elapsed.rem_euclid(CYCLE_YEARS);
    // Leap years in the partial cycle are the break-points the remainder has reached
    let partial_leaps = SHAMSI_LEAP_BREAK_POINTS
        .iter()
        .filter(|&&position| i64::from(position) <= remainder)
        .count() as i64;

    DAYS_IN_COMMON_YEAR as i64 * elapsed + cycles * SHAMSI_LEAP_DAYS_PER_CYCLE + partial_leaps
}

/// Days from the first of the year to the first of `month`.
const fn days_before_month(month: u8) -> i64 {
    let month = month as i64;
    if month <= SHAMSI_LAST_LONG_MONTH as i64 + 1 {
        (month - 1) * LONG_MONTH_DAYS
    } else {
        SHAMSI_FIRST_HALF_DAYS + (month - SHAMSI_LAST_LONG_MONTH as i64 - 1) * SHORT_MONTH_DAYS
    }
}

/// Splits a zero-based day of year into (month, day).
const fn month_and_day(day_of_year: i64) -> (u8, u8) {
    let (month, day) = if day_of_year < SHAMSI_FIRST_HALF_DAYS {
        (
            day_of_year / LONG_MONTH_DAYS + 1,
            day_of_year % LONG_MONTH_DAYS + 1,
        )
    } else {
        let rest = day_of_year - SHAMSI_FIRST_HALF_DAYS;
        (
            rest / SHORT_MONTH_DAYS + SHAMSI_LAST_LONG_MONTH as i64 + 1,
            rest % SHORT_MONTH_DAYS + 1,
        )
    };
    // day_of_year is in 0..366, so month <= 12 and day <= 31
    (month as u8, day as u8)
}

impl ShamsiDate {
    /// Julian Day Number of this date.
    pub fn to_julian_day(&self) -> JulianDay {
        JulianDay::new(
            SHAMSI_EPOCH
                + days_before_year(i64::from(self.year()))
                + days_before_month(self.month())
                + i64::from(self.day())
                - 1,
        )
    }

    /// Shamsi date of a Julian Day Number.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the year does not fit in an `i32`.
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, CalendarError> {
        let days_since_epoch = check_magnitude(jd)? - SHAMSI_EPOCH;
        let cycles = days_since_epoch.div_euclid(SHAMSI_DAYS_PER_CYCLE);
        let mut remaining = days_since_epoch - cycles * SHAMSI_DAYS_PER_CYCLE;
        let mut year = cycles * CYCLE_YEARS + 1;

        loop {
            let length = year_length(year);
            if remaining < length {
                break;
            }
            remaining -= length;
            year += 1;
        }
        tracing::trace!(jd = jd.get(), year, remaining, "resolved Shamsi year");

        let (month, day) = month_and_day(remaining);
        Ok(Self::from_parts_unchecked(narrow_year(year, jd)?, month, day))
    }

    /// Day of the year, 1-based (Hamal 1 is day 1)
    pub const fn ordinal(&self) -> u16 {
        // at most 186 + 5 * 30 + 30
        (days_before_month(self.month()) + self.day() as i64) as u16
    }

    /// First day of this date's year
    pub const fn start_of_year(&self) -> Self {
        Self::from_parts_unchecked(self.year(), HAMAL, 1)
    }

    /// Day of week, 1 = Saturday ... 7 = Friday
    pub fn weekday(&self) -> Weekday {
        self.to_julian_day().weekday()
    }

    /// Gregorian date of the same day.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the Gregorian year does not fit in an `i32`.
    pub fn to_gregorian(&self) -> Result<GregorianDate, CalendarError> {
        GregorianDate::from_julian_day(self.to_julian_day())
    }
}

impl GregorianDate {
    /// Shamsi date of the same day.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the Shamsi year does not fit in an `i32`.
    pub fn to_shamsi(&self) -> Result<ShamsiDate, CalendarError> {
        ShamsiDate::from_julian_day(self.to_julian_day())
    }
}

impl TryFrom<ShamsiDate> for GregorianDate {
    type Error = CalendarError;

    fn try_from(date: ShamsiDate) -> Result<Self, Self::Error> {
        date.to_gregorian()
    }
}

impl TryFrom<GregorianDate> for ShamsiDate {
    type Error = CalendarError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        date.to_shamsi()
    }
}

/// Julian Day Number of a Shamsi (year, month, day).
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for a malformed date and
/// `CalendarError::PolicyRangeExceeded` for a year outside the default range.
pub fn shamsi_to_julian_day(year: i32, month: u8, day: u8) -> Result<JulianDay, CalendarError> {
    Ok(ensure_valid_shamsi_date(year, month, day)?.to_julian_day())
}

/// Shamsi date of a Julian Day Number.
///
/// # Errors
/// Returns `CalendarError::JulianDayOutOfRange` if the year does not fit in an `i32`.
pub fn julian_day_to_shamsi(jd: JulianDay) -> Result<ShamsiDate, CalendarError> {
    ShamsiDate::from_julian_day(jd)
}

/// Converts a Shamsi date to the Gregorian calendar.
///
/// # Errors
/// Returns `CalendarError::JulianDayOutOfRange` if the Gregorian year does not fit in an `i32`.
pub fn shamsi_to_gregorian(date: ShamsiDate) -> Result<GregorianDate, CalendarError> {
    date.to_gregorian()
}

/// Converts a Gregorian date to the Shamsi calendar.
///
/// # Errors
/// Returns `CalendarError::JulianDayOutOfRange` if the Shamsi year does not fit in an `i32`.
pub fn gregorian_to_shamsi(date: GregorianDate) -> Result<ShamsiDate, CalendarError> {
    date.to_shamsi()
}
