//! Solar Hijri (Shamsi) and Gregorian calendar conversion.
//!
//! Both calendars map to and from a shared [`JulianDay`] number. Gregorian
//! dates use the proleptic 4/100/400 rule; Shamsi dates use the conventional
//! 33-year intercalation cycle with leap years at positions
//! `{1, 5, 9, 13, 17, 22, 26, 30}`. On top of the conversions sit date
//! arithmetic and the [`Calendar`] view generator.
//!
//! ```
//! use shamsi_calendar::{Calendar, GregorianDate, ShamsiDate, Weekday};
//!
//! # fn main() -> Result<(), shamsi_calendar::CalendarError> {
//! let nowruz = ShamsiDate::new(1403, 1, 1)?;
//! assert_eq!(nowruz.to_gregorian()?, GregorianDate::new(2024, 3, 20)?);
//! assert_eq!(nowruz.weekday(), Weekday::Wednesday);
//!
//! let stats = Calendar::default().year_statistics(1403)?;
//! assert!(stats.is_leap_year);
//! assert_eq!(stats.total_days, 366);
//! # Ok(())
//! # }
//! ```

mod arithmetic;
mod config;
mod consts;
mod error;
mod julian;
mod leap;
mod month;
mod prelude;
mod shamsi;
mod types;
mod validate;
mod views;

pub use arithmetic::{
    add_days_to_shamsi_date, compare_shamsi_dates, days_between_shamsi_dates,
    first_weekday_of_month, is_after, is_before, is_same_date, is_weekend, last_weekday_of_month,
    shamsi_day_of_week,
};
pub use config::{CalendarConfig, YearRange};
pub use consts::*;
pub use error::CalendarError;
pub use julian::{gregorian_day_of_week, gregorian_to_julian_day, julian_day_to_gregorian, JulianDay};
pub use leap::{
    days_in_gregorian_year, days_in_shamsi_year, is_gregorian_leap_year, is_shamsi_leap_year,
    shamsi_leap_years_in_range,
};
pub use month::{
    days_in_gregorian_month, days_in_shamsi_month, gregorian_month_length, shamsi_month_length,
};
pub use shamsi::{
    gregorian_to_shamsi, julian_day_to_shamsi, shamsi_to_gregorian, shamsi_to_julian_day,
};
pub use types::{CalendarSystem, GregorianDate, ShamsiDate, StartOfWeek, Weekday};
pub use validate::{is_valid_gregorian_date, is_valid_shamsi_date};
pub use views::{
    Calendar, DayView, MonthGrid, MonthStatistics, MonthSummary, MonthView, WeekView, YearStatistics,
    YearView,
};
