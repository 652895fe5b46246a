//! Julian Day Numbers and the proleptic Gregorian mapping.
//!
//! All divisions are floor divisions (`div_euclid` with positive divisors),
//! so the conversions are exact inverses for every integer day number.

use crate::consts::{DAYS_IN_WEEK, WEEKDAY_OFFSET};
use crate::prelude::*;
use crate::types::{GregorianDate, Weekday};
use crate::validate::ensure_valid_gregorian_date;
use crate::CalendarError;
use serde::{Deserialize, Serialize};

/// Days elapsed since the astronomical Julian Day epoch.
///
/// This is the only value passed between the two calendar systems.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct JulianDay(i64);

impl JulianDay {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day of week, 1 = Saturday ... 7 = Friday: `((jd + 2) mod 7) + 1`.
    pub const fn weekday(self) -> Weekday {
        let index = (self.0 + WEEKDAY_OFFSET).rem_euclid(DAYS_IN_WEEK as i64);
        Weekday::ALL[index as usize]
    }

    /// Adds `days` (may be negative), failing on `i64` overflow.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the sum overflows.
    pub fn checked_add_days(self, days: i64) -> Result<Self, CalendarError> {
        self.0
            .checked_add(days)
            .map(Self)
            .ok_or(CalendarError::JulianDayOutOfRange(self.0))
    }

    /// Signed number of days from `earlier` to `self`.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the difference overflows.
    pub fn checked_days_since(self, earlier: Self) -> Result<i64, CalendarError> {
        self.0
            .checked_sub(earlier.0)
            .ok_or(CalendarError::JulianDayOutOfRange(self.0))
    }

    /// Absolute number of days between two day numbers; never overflows.
    pub const fn abs_diff(self, other: Self) -> u64 {
        self.0.abs_diff(other.0)
    }
}

/// Largest day number magnitude the conversions accept; well beyond any `i32` year.
const MAX_JULIAN_DAY_MAGNITUDE: i64 = 1 << 40;

/// Rejects day numbers whose intermediate arithmetic could overflow.
pub(crate) const fn check_magnitude(jd: JulianDay) -> Result<i64, CalendarError> {
    if jd.0 > MAX_JULIAN_DAY_MAGNITUDE || jd.0 < -MAX_JULIAN_DAY_MAGNITUDE {
        return Err(CalendarError::JulianDayOutOfRange(jd.0));
    }
    Ok(jd.0)
}

/// Narrows a computed year to `i32`, reporting the offending day number otherwise.
pub(crate) fn narrow_year(year: i64, jd: JulianDay) -> Result<i32, CalendarError> {
    i32::try_from(year).map_err(|_| CalendarError::JulianDayOutOfRange(jd.get()))
}

impl GregorianDate {
    /// Julian Day Number of this date.
    pub fn to_julian_day(&self) -> JulianDay {
        let month = i64::from(self.month());
        let a = (14 - month).div_euclid(12);
        let y = i64::from(self.year()) + 4800 - a;
        let m = month + 12 * a - 3;

        JulianDay(
            i64::from(self.day()) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
                - y.div_euclid(100)
                + y.div_euclid(400)
                - 32045,
        )
    }

    /// Gregorian date of a Julian Day Number.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the year does not fit in an `i32`.
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, CalendarError> {
        let a = check_magnitude(jd)? + 32044;
        let b = (4 * a + 3).div_euclid(146_097);
        let c = a - (146_097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);

        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = 100 * b + d - 4800 + m.div_euclid(10);

        // e is in 0..366 and m in 0..12, so day and month fit in u8
        let (Ok(month), Ok(day)) = (u8::try_from(month), u8::try_from(day)) else {
            return Err(CalendarError::JulianDayOutOfRange(jd.get()));
        };
        Ok(Self::from_parts_unchecked(narrow_year(year, jd)?, month, day))
    }

    /// Day of week, 1 = Saturday ... 7 = Friday
    pub fn weekday(&self) -> Weekday {
        self.to_julian_day().weekday()
    }
}

/// Julian Day Number of a Gregorian (year, month, day).
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for a malformed date and
/// `CalendarError::PolicyRangeExceeded` for a year outside the default range.
pub fn gregorian_to_julian_day(year: i32, month: u8, day: u8) -> Result<JulianDay, CalendarError> {
    Ok(ensure_valid_gregorian_date(year, month, day)?.to_julian_day())
}

/// Gregorian date of a Julian Day Number.
///
/// # Errors
/// Returns `CalendarError::JulianDayOutOfRange` if the year does not fit in an `i32`.
pub fn julian_day_to_gregorian(jd: JulianDay) -> Result<GregorianDate, CalendarError> {
    GregorianDate::from_julian_day(jd)
}

/// Day of week of a Gregorian (year, month, day).
///
/// # Errors
/// Fails like [`gregorian_to_julian_day`].
pub fn gregorian_day_of_week(year: i32, month: u8, day: u8) -> Result<Weekday, CalendarError> {
    Ok(gregorian_to_julian_day(year, month, day)?.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::days_in_gregorian_month;

    fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_known_julian_days() {
        struct TestCase {
            date: (i32, u8, u8),
            jd: i64,
        }

        let cases = [
            TestCase {
                date: (2000, 1, 1),
                jd: 2_451_545,
            },
            TestCase {
                date: (1970, 1, 1),
                jd: 2_440_588,
            },
            TestCase {
                date: (2024, 3, 20),
                jd: 2_460_390,
            },
            TestCase {
                date: (622, 3, 21),
                jd: 1_948_320,
            },
            TestCase {
                date: (-4713, 11, 24),
                jd: 0,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            let date = gregorian(y, m, d);
            assert_eq!(date.to_julian_day().get(), case.jd, "{date}");
            assert_eq!(GregorianDate::from_julian_day(JulianDay::new(case.jd)).unwrap(), date);
        }
    }

    #[test]
    fn test_round_trip_all_dates_in_range() {
        let mut previous: Option<JulianDay> = None;
        for year in 1..=3000 {
            for month in 1..=12 {
                for day in 1..=days_in_gregorian_month(year, month).unwrap() {
                    let date = gregorian(year, month, day);
                    let jd = date.to_julian_day();
                    assert_eq!(GregorianDate::from_julian_day(jd).unwrap(), date);
                    if let Some(prev) = previous {
                        assert_eq!(
                            jd.checked_days_since(prev).unwrap(),
                            1,
                            "{date} does not follow its predecessor"
                        );
                    }
                    previous = Some(jd);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_negative_julian_days() {
        for value in (-2_000_000..-1_000_000).step_by(997) {
            let jd = JulianDay::new(value);
            let date = GregorianDate::from_julian_day(jd).unwrap();
            assert_eq!(date.to_julian_day(), jd);
        }
    }

    #[test]
    fn test_from_julian_day_out_of_range() {
        for value in [i64::MAX, i64::MIN, 1 << 41] {
            let jd = JulianDay::new(value);
            assert_eq!(
                GregorianDate::from_julian_day(jd),
                Err(CalendarError::JulianDayOutOfRange(value))
            );
        }
    }

    #[test]
    fn test_weekday_alignment() {
        // 2024-03-20 was a Wednesday
        assert_eq!(gregorian(2024, 3, 20).weekday(), Weekday::Wednesday);
        // 2000-01-01 was a Saturday
        assert_eq!(gregorian(2000, 1, 1).weekday(), Weekday::Saturday);
        // 2025-01-10 was a Friday
        assert_eq!(gregorian(2025, 1, 10).weekday(), Weekday::Friday);
        // Negative day numbers wrap with the same cycle
        assert_eq!(JulianDay::new(-7).weekday(), JulianDay::new(0).weekday());
    }

    #[test]
    fn test_checked_add_days() {
        let jd = JulianDay::new(2_460_390);
        assert_eq!(jd.checked_add_days(-390).unwrap().get(), 2_460_000);
        assert!(JulianDay::new(i64::MAX).checked_add_days(1).is_err());
        assert!(JulianDay::new(i64::MIN).checked_add_days(-1).is_err());
    }

    #[test]
    fn test_day_differences_do_not_overflow() {
        let a = JulianDay::new(2_460_390);
        let b = JulianDay::new(2_460_000);
        assert_eq!(a.checked_days_since(b).unwrap(), 390);
        assert_eq!(b.checked_days_since(a).unwrap(), -390);
        assert_eq!(a.abs_diff(b), 390);
        assert_eq!(b.abs_diff(a), 390);

        let max = JulianDay::new(i64::MAX);
        let min = JulianDay::new(i64::MIN);
        assert_eq!(
            max.checked_days_since(JulianDay::new(-1)),
            Err(CalendarError::JulianDayOutOfRange(i64::MAX))
        );
        assert!(min.checked_days_since(JulianDay::new(1)).is_err());
        assert_eq!(max.abs_diff(min), u64::MAX);
    }

    #[test]
    fn test_triple_entry_points_fail_fast() {
        assert_eq!(gregorian_to_julian_day(2024, 3, 20).unwrap().get(), 2_460_390);
        assert!(matches!(
            gregorian_to_julian_day(2023, 2, 29),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(matches!(
            gregorian_to_julian_day(3001, 1, 1),
            Err(CalendarError::PolicyRangeExceeded { year: 3001, .. })
        ));
        assert_eq!(gregorian_day_of_week(2025, 1, 8).unwrap(), Weekday::Wednesday);
        assert_eq!(
            julian_day_to_gregorian(JulianDay::new(2_451_545)).unwrap(),
            gregorian(2000, 1, 1)
        );
    }

    #[test]
    fn test_julian_day_conversions() {
        let jd: JulianDay = 10_i64.into();
        let raw: i64 = jd.into();
        assert_eq!(raw, 10);
        assert_eq!(jd.checked_add_days(5).unwrap().get(), 15);
        assert_eq!(jd.to_string(), "10");
        assert_eq!(serde_json::to_string(&jd).unwrap(), "10");
    }
}
