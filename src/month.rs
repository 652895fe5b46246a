use crate::CalendarError;
use crate::consts::{
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_DAYS_IN_MONTH, HUT, HUT_DAYS_LEAP, MONTHS_IN_YEAR,
    SHAMSI_DAYS_IN_MONTH,
};
use crate::leap::{is_gregorian_leap_year, is_shamsi_leap_year};

fn check_month(month: u8) -> Result<(), CalendarError> {
    if month == 0 || month > MONTHS_IN_YEAR {
        return Err(CalendarError::InvalidMonth(month));
    }
    Ok(())
}

/// Days in a Shamsi month: 31 for months 1-6, 30 for 7-11, 29 or 30 for Hut.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12.
pub fn shamsi_month_length(month: u8, is_leap: bool) -> Result<u8, CalendarError> {
    check_month(month)?;
    Ok(shamsi_month_length_unchecked(month, is_leap))
}

/// Days in a Gregorian month, February being 28 or 29.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12.
pub fn gregorian_month_length(month: u8, is_leap: bool) -> Result<u8, CalendarError> {
    check_month(month)?;
    Ok(gregorian_month_length_unchecked(month, is_leap))
}

/// Days in `month` of Shamsi `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12.
pub fn days_in_shamsi_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    shamsi_month_length(month, is_shamsi_leap_year(year))
}

/// Days in `month` of Gregorian `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12.
pub fn days_in_gregorian_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    gregorian_month_length(month, is_gregorian_leap_year(year))
}

pub(crate) const fn shamsi_month_length_unchecked(month: u8, is_leap: bool) -> u8 {
    debug_assert!(month != 0 && month <= MONTHS_IN_YEAR);

    if month == HUT && is_leap {
        HUT_DAYS_LEAP
    } else {
        SHAMSI_DAYS_IN_MONTH[month as usize]
    }
}

pub(crate) const fn gregorian_month_length_unchecked(month: u8, is_leap: bool) -> u8 {
    debug_assert!(month != 0 && month <= MONTHS_IN_YEAR);

    if month == FEBRUARY && is_leap {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}
