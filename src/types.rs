use crate::CalendarError;
use crate::consts::{DATE_SEPARATOR, DAYS_IN_WEEK, MIN_DAY, MONTHS_IN_YEAR, WEEKEND_DAYS};
use crate::leap::{is_gregorian_leap_year, is_shamsi_leap_year};
use crate::month::{gregorian_month_length_unchecked, shamsi_month_length_unchecked};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The calendar a date value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    Shamsi,
    Gregorian,
}

/// Raw `{year, month, day}` object used on the wire.
#[derive(Debug, Clone, Copy, Deserialize)]
struct DateParts {
    year: i32,
    month: u8,
    day: u8,
}

/// A Solar Hijri (Shamsi) date.
///
/// Month and day are guaranteed to be valid for the year; the year itself is
/// proleptic and may lie outside the administrative range, which is enforced
/// by [`YearRange`](crate::YearRange) instead.
/// Ordering is lexicographic on (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct ShamsiDate {
    year: i32,
    month: u8,
    day: u8,
}

impl ShamsiDate {
    /// Creates a new Shamsi date, validating month and day against the leap-aware month length.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the month is outside 1-12 or the day
    /// is outside the month.
    pub const fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if month == 0 || month > MONTHS_IN_YEAR {
            return Err(Self::invalid(year, month, day));
        }
        let max_day = shamsi_month_length_unchecked(month, is_shamsi_leap_year(year));
        if day < MIN_DAY || day > max_day {
            return Err(Self::invalid(year, month, day));
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components already known to be valid.
    pub(crate) const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(month != 0 && month <= MONTHS_IN_YEAR);
        Self { year, month, day }
    }

    const fn invalid(year: i32, month: u8, day: u8) -> CalendarError {
        CalendarError::InvalidDate {
            calendar: CalendarSystem::Shamsi,
            year,
            month,
            day,
        }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns true if this date falls in a Shamsi leap year
    pub const fn is_leap_year(&self) -> bool {
        is_shamsi_leap_year(self.year)
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        shamsi_month_length_unchecked(self.month, self.is_leap_year())
    }

    /// Returns (year, month, day)
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

/// A proleptic Gregorian date.
///
/// Month and day are guaranteed to be valid for the year.
/// Ordering is lexicographic on (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new Gregorian date, validating month and day against the leap-aware month length.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the month is outside 1-12 or the day
    /// is outside the month.
    pub const fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if month == 0 || month > MONTHS_IN_YEAR {
            return Err(Self::invalid(year, month, day));
        }
        let max_day = gregorian_month_length_unchecked(month, is_gregorian_leap_year(year));
        if day < MIN_DAY || day > max_day {
            return Err(Self::invalid(year, month, day));
        }
        Ok(Self { year, month, day })
    }

    pub(crate) const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(month != 0 && month <= MONTHS_IN_YEAR);
        Self { year, month, day }
    }

    const fn invalid(year: i32, month: u8, day: u8) -> CalendarError {
        CalendarError::InvalidDate {
            calendar: CalendarSystem::Gregorian,
            year,
            month,
            day,
        }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        is_gregorian_leap_year(self.year)
    }

    pub const fn days_in_month(&self) -> u8 {
        gregorian_month_length_unchecked(self.month, self.is_leap_year())
    }

    /// Returns (year, month, day)
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }
}

impl<'de> Deserialize<'de> for ShamsiDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let parts = DateParts::deserialize(deserializer)?;
        Self::new(parts.year, parts.month, parts.day).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let parts = DateParts::deserialize(deserializer)?;
        Self::new(parts.year, parts.month, parts.day).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<(i32, u8, u8)> for ShamsiDate {
    type Error = CalendarError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for GregorianDate {
    type Error = CalendarError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

/// Splits `YYYY-MM-DD` (with an optional leading `-` for non-positive years)
/// into numeric components.
fn parse_date_parts(s: &str) -> Result<(i32, u8, u8), CalendarError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::EmptyInput);
    }

    let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(CalendarError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators: {s}",
            parts.len() - 1
        )));
    };

    let invalid = || CalendarError::InvalidFormat(s.to_owned());
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u8>().map_err(|_| invalid())?;
    let day = day.parse::<u8>().map_err(|_| invalid())?;

    Ok((if negative { -year } else { year }, month, day))
}

impl FromStr for ShamsiDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_date_parts(s)?;
        Self::new(year, month, day)
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_date_parts(s)?;
        Self::new(year, month, day)
    }
}

/// Day of the week in the Afghan numbering: 1 = Saturday ... 7 = Friday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Saturday = 1,
    Sunday = 2,
    Monday = 3,
    Tuesday = 4,
    Wednesday = 5,
    Thursday = 6,
    Friday = 7,
}

impl Weekday {
    /// All weekdays in numbering order, Saturday first
    pub const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Creates a weekday from its number (1 = Saturday ... 7 = Friday)
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` if the value is outside 1-7.
    pub const fn new(value: u8) -> Result<Self, CalendarError> {
        if value == 0 || value > DAYS_IN_WEEK {
            return Err(CalendarError::InvalidWeekday(value));
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    /// Returns the weekday number (1 = Saturday ... 7 = Friday)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns true if this weekday is in the weekend set
    pub const fn is_weekend(self) -> bool {
        let mut i = 0;
        while i < WEEKEND_DAYS.len() {
            if WEEKEND_DAYS[i] == self.number() {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Days from `start` forward to `self`, in `0..7`.
    pub const fn days_since(self, start: Self) -> u8 {
        (self.number() + DAYS_IN_WEEK - start.number()) % DAYS_IN_WEEK
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

/// First column of week and grid views.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum StartOfWeek {
    #[default]
    Saturday = 1,
    Sunday = 2,
    Monday = 3,
}

impl StartOfWeek {
    /// Creates a start of week from its number (1 = Saturday, 2 = Sunday, 3 = Monday)
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidStartOfWeek` for any other value.
    pub const fn new(value: u8) -> Result<Self, CalendarError> {
        match value {
            1 => Ok(Self::Saturday),
            2 => Ok(Self::Sunday),
            3 => Ok(Self::Monday),
            _ => Err(CalendarError::InvalidStartOfWeek(value)),
        }
    }

    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The weekday this option puts in the first column
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Saturday => Weekday::Saturday,
            Self::Sunday => Weekday::Sunday,
            Self::Monday => Weekday::Monday,
        }
    }
}

impl TryFrom<u8> for StartOfWeek {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StartOfWeek> for u8 {
    fn from(start: StartOfWeek) -> Self {
        start.number()
    }
}

impl From<StartOfWeek> for Weekday {
    fn from(start: StartOfWeek) -> Self {
        start.weekday()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shamsi_new_valid() {
        assert!(ShamsiDate::new(1403, 1, 1).is_ok());
        assert!(ShamsiDate::new(1403, 6, 31).is_ok());
        assert!(ShamsiDate::new(1403, 7, 30).is_ok());
        // 1403 is leap, Hut has 30 days
        assert!(ShamsiDate::new(1403, 12, 30).is_ok());
    }

    #[test]
    fn test_shamsi_new_invalid() {
        let cases = [(1403, 0, 1), (1403, 13, 1), (1403, 1, 0), (1403, 7, 31), (1404, 12, 30)];
        for (year, month, day) in cases {
            assert_eq!(
                ShamsiDate::new(year, month, day),
                Err(CalendarError::InvalidDate {
                    calendar: CalendarSystem::Shamsi,
                    year,
                    month,
                    day
                }),
                "{year}-{month}-{day} should be rejected"
            );
        }
    }

    #[test]
    fn test_gregorian_new_valid_and_invalid() {
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2023, 2, 29).is_err());
        assert!(GregorianDate::new(1900, 2, 29).is_err());
        assert!(GregorianDate::new(2000, 2, 29).is_ok());
        assert!(GregorianDate::new(2024, 4, 31).is_err());
        assert!(matches!(
            GregorianDate::new(2024, 13, 1),
            Err(CalendarError::InvalidDate {
                calendar: CalendarSystem::Gregorian,
                ..
            })
        ));
    }

    #[test]
    fn test_accessors() {
        let date = ShamsiDate::new(1403, 10, 19).unwrap();
        assert_eq!(date.year(), 1403);
        assert_eq!(date.month(), 10);
        assert_eq!(date.day(), 19);
        assert_eq!(date.to_tuple(), (1403, 10, 19));
        assert!(date.is_leap_year());
        assert_eq!(date.days_in_month(), 30);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = ShamsiDate::new(1402, 12, 29).unwrap();
        let b = ShamsiDate::new(1403, 1, 1).unwrap();
        let c = ShamsiDate::new(1403, 1, 2).unwrap();
        let d = ShamsiDate::new(1403, 2, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
        assert_eq!(b, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(ShamsiDate::new(1403, 1, 1).unwrap().to_string(), "1403-01-01");
        assert_eq!(GregorianDate::new(622, 3, 21).unwrap().to_string(), "0622-03-21");
        assert_eq!(ShamsiDate::new(-5, 2, 3).unwrap().to_string(), "-005-02-03");
    }

    #[test]
    fn test_parse() {
        let date: ShamsiDate = " 1403-10-19 ".parse().unwrap();
        assert_eq!(date.to_tuple(), (1403, 10, 19));

        let date: GregorianDate = "2025-01-08".parse().unwrap();
        assert_eq!(date.to_tuple(), (2025, 1, 8));

        let date: ShamsiDate = "-005-02-03".parse().unwrap();
        assert_eq!(date.to_tuple(), (-5, 2, 3));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ShamsiDate>(), Err(CalendarError::EmptyInput));
        assert!(matches!(
            "1403-01".parse::<ShamsiDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1403-01-01-01".parse::<ShamsiDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "abcd-01-01".parse::<GregorianDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1404-12-30".parse::<ShamsiDate>(),
            Err(CalendarError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_display_parse_agree() {
        let date = ShamsiDate::new(1403, 12, 30).unwrap();
        let parsed: ShamsiDate = date.to_string().parse().unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_date_serde() {
        let date = ShamsiDate::new(1403, 1, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":1403,"month":1,"day":1}"#);

        let parsed: ShamsiDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<GregorianDate, _> =
            serde_json::from_str(r#"{"year":2023,"month":2,"day":29}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_weekday_numbers() {
        for (i, weekday) in Weekday::ALL.iter().enumerate() {
            let number = u8::try_from(i + 1).unwrap();
            assert_eq!(weekday.number(), number);
            assert_eq!(Weekday::new(number).unwrap(), *weekday);
        }
        assert_eq!(Weekday::new(0), Err(CalendarError::InvalidWeekday(0)));
        assert_eq!(Weekday::new(8), Err(CalendarError::InvalidWeekday(8)));
    }

    #[test]
    fn test_weekday_weekend_is_friday_only() {
        let weekends: Vec<Weekday> = Weekday::ALL.into_iter().filter(|w| w.is_weekend()).collect();
        assert_eq!(weekends, vec![Weekday::Friday]);
    }

    #[test]
    fn test_weekday_days_since() {
        assert_eq!(Weekday::Saturday.days_since(Weekday::Saturday), 0);
        assert_eq!(Weekday::Wednesday.days_since(Weekday::Saturday), 4);
        assert_eq!(Weekday::Saturday.days_since(Weekday::Sunday), 6);
        assert_eq!(Weekday::Sunday.days_since(Weekday::Monday), 6);
        assert_eq!(Weekday::Friday.days_since(Weekday::Monday), 4);
    }

    #[test]
    fn test_weekday_serde() {
        let json = serde_json::to_string(&Weekday::Friday).unwrap();
        assert_eq!(json, "7");
        let parsed: Weekday = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Weekday::Saturday);
        assert!(serde_json::from_str::<Weekday>("9").is_err());
    }

    #[test]
    fn test_start_of_week() {
        assert_eq!(StartOfWeek::default(), StartOfWeek::Saturday);
        assert_eq!(StartOfWeek::new(2).unwrap(), StartOfWeek::Sunday);
        assert_eq!(StartOfWeek::new(3).unwrap().weekday(), Weekday::Monday);
        assert_eq!(StartOfWeek::new(4), Err(CalendarError::InvalidStartOfWeek(4)));
        assert_eq!(StartOfWeek::new(0), Err(CalendarError::InvalidStartOfWeek(0)));
        assert_eq!(u8::from(StartOfWeek::Monday), 3);
        assert_eq!(serde_json::to_string(&StartOfWeek::Sunday).unwrap(), "2");
    }

    #[test]
    fn test_calendar_system_display() {
        assert_eq!(CalendarSystem::Shamsi.to_string(), "Shamsi");
        assert_eq!(
            serde_json::to_string(&CalendarSystem::Gregorian).unwrap(),
            r#""gregorian""#
        );
    }
}
