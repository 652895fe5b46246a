use crate::types::CalendarSystem;

/// Error type for calendar construction, conversion and view operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month or day outside the leap-aware bounds of the calendar.
    #[error("Invalid {calendar} date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        calendar: CalendarSystem,
        year: i32,
        month: u8,
        day: u8,
    },

    /// Month lookup outside 1-12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Year outside the configured administrative range.
    #[error("Year {year} is outside the supported range {min}-{max}")]
    PolicyRangeExceeded { year: i32, min: i32, max: i32 },

    /// Weekday number outside 1-7.
    #[error("Invalid weekday: {0} (must be 1-7)")]
    InvalidWeekday(u8),

    /// Start of week other than Saturday, Sunday or Monday.
    #[error("Invalid start of week: {0} (must be 1, 2 or 3)")]
    InvalidStartOfWeek(u8),

    /// Julian day whose calendar year does not fit in an `i32`.
    #[error("Julian day {0} cannot be represented as a calendar date")]
    JulianDayOutOfRange(i64),

    /// Configured year range with `min > max`.
    #[error("Invalid year range: {min} is after {max}")]
    InvalidYearRange { min: i32, max: i32 },

    /// Malformed date string.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Date string with no content.
    #[error("Empty date string")]
    EmptyInput,
}
