//! Week, month and year views built from the conversion primitives.
//!
//! Views are plain numeric aggregates computed fresh on every call; holiday
//! and localized fields are attached by the caller.

use crate::config::CalendarConfig;
use crate::consts::{DAYS_IN_WEEK, HUT, MONTHS_IN_YEAR};
use crate::julian::JulianDay;
use crate::leap::{days_in_shamsi_year, is_shamsi_leap_year};
use crate::month::days_in_shamsi_month;
use crate::types::{GregorianDate, ShamsiDate, StartOfWeek, Weekday};
use crate::CalendarError;
use serde::Serialize;

const WEEK_LEN: usize = DAYS_IN_WEEK as usize;

/// Weekday/weekend counts for one Shamsi month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthStatistics {
    pub total_days: u8,
    pub weekdays: u8,
    pub weekends: u8,
    pub start_weekday: Weekday,
    pub end_weekday: Weekday,
}

/// Weekday/weekend counts for one Shamsi year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearStatistics {
    pub total_days: u16,
    pub is_leap_year: bool,
    pub total_weekdays: u16,
    pub total_weekends: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    pub shamsi: ShamsiDate,
    pub gregorian: GregorianDate,
    pub weekday: Weekday,
    pub is_weekend: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    /// Week of the year counted in 7-day blocks from Hamal 1
    pub week_number: u16,
    pub start: ShamsiDate,
    pub end: ShamsiDate,
    pub days: Vec<DayView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub year: i32,
    pub month: u8,
    pub total_days: u8,
    pub start_weekday: Weekday,
    /// Weeks containing days 1, 8, 15, ... of the month
    pub weeks: Vec<WeekView>,
    pub statistics: MonthStatistics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub month: u8,
    pub total_days: u8,
    pub start_weekday: Weekday,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearView {
    pub year: i32,
    pub is_leap_year: bool,
    pub total_days: u16,
    pub months: Vec<MonthSummary>,
    pub statistics: YearStatistics,
}

/// A month laid out in rows of seven cells, `None` marking padding.
///
/// `rows` are always padded; [`MonthGrid::unpadded_rows`] gives the layout
/// without the empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u8,
    pub start_of_week: StartOfWeek,
    pub leading_padding: u8,
    pub trailing_padding: u8,
    pub rows: Vec<[Option<ShamsiDate>; WEEK_LEN]>,
}

impl MonthGrid {
    /// Days in runs of seven starting at day 1, the last run possibly shorter.
    pub fn unpadded_rows(&self) -> Vec<Vec<ShamsiDate>> {
        let days: Vec<ShamsiDate> = self.rows.iter().flatten().flatten().copied().collect();
        days.chunks(WEEK_LEN).map(<[ShamsiDate]>::to_vec).collect()
    }
}

/// View generator over the Shamsi calendar.
///
/// Every operation first checks the requested year against the configured
/// [`YearRange`](crate::YearRange). Operations taking an optional start of
/// week fall back to the configured one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calendar {
    config: CalendarConfig,
}

impl Calendar {
    pub const fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    fn start_or_default(&self, start: Option<StartOfWeek>) -> StartOfWeek {
        start.unwrap_or(self.config.start_of_week)
    }

    /// The seven consecutive dates of the week containing `date`, the first
    /// falling on `start`.
    ///
    /// # Errors
    /// Returns `CalendarError::PolicyRangeExceeded` if the year is outside the configured range.
    pub fn week_dates(
        &self,
        date: ShamsiDate,
        start: Option<StartOfWeek>,
    ) -> Result<[ShamsiDate; WEEK_LEN], CalendarError> {
        self.config.year_range.check(date.year())?;
        let start = self.start_or_default(start);
        let back = date.weekday().days_since(start.weekday());
        let first = date.add_days(-i64::from(back))?;
        tracing::trace!(%date, %start, %first, "week dates");

        let mut dates = [first; WEEK_LEN];
        for (offset, slot) in (0_i64..).zip(dates.iter_mut()) {
            *slot = first.add_days(offset)?;
        }
        Ok(dates)
    }

    /// Weekday and weekend counts for a month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for a month outside 1-12 and
    /// `CalendarError::PolicyRangeExceeded` if the year is outside the configured range.
    pub fn month_statistics(&self, year: i32, month: u8) -> Result<MonthStatistics, CalendarError> {
        self.config.year_range.check(year)?;
        let total_days = days_in_shamsi_month(year, month)?;
        let first = ShamsiDate::from_parts_unchecked(year, month, 1).to_julian_day();
        let last = first.checked_add_days(i64::from(total_days) - 1)?;

        let mut weekends = 0_u8;
        for offset in 0..i64::from(total_days) {
            if first.checked_add_days(offset)?.weekday().is_weekend() {
                weekends += 1;
            }
        }

        Ok(MonthStatistics {
            total_days,
            weekdays: total_days - weekends,
            weekends,
            start_weekday: first.weekday(),
            end_weekday: last.weekday(),
        })
    }

    /// Sum of the twelve month statistics of a year.
    ///
    /// # Errors
    /// Returns `CalendarError::PolicyRangeExceeded` if the year is outside the configured range.
    pub fn year_statistics(&self, year: i32) -> Result<YearStatistics, CalendarError> {
        let months = self.months_of_year(year)?;
        Ok(Self::sum_months(year, &months))
    }

    fn months_of_year(&self, year: i32) -> Result<Vec<MonthStatistics>, CalendarError> {
        (1..=MONTHS_IN_YEAR)
            .map(|month| self.month_statistics(year, month))
            .collect()
    }

    fn sum_months(year: i32, months: &[MonthStatistics]) -> YearStatistics {
        let stats = months.iter().fold(
            YearStatistics {
                total_days: 0,
                is_leap_year: is_shamsi_leap_year(year),
                total_weekdays: 0,
                total_weekends: 0,
            },
            |mut acc, month| {
                acc.total_days += u16::from(month.total_days);
                acc.total_weekdays += u16::from(month.weekdays);
                acc.total_weekends += u16::from(month.weekends);
                acc
            },
        );
        debug_assert_eq!(stats.total_days, days_in_shamsi_year(year));
        stats
    }

    /// Month laid out in rows of seven, padded before the first day and after the last.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for a month outside 1-12 and
    /// `CalendarError::PolicyRangeExceeded` if the year is outside the configured range.
    pub fn month_grid(
        &self,
        year: i32,
        month: u8,
        start: Option<StartOfWeek>,
    ) -> Result<MonthGrid, CalendarError> {
        self.config.year_range.check(year)?;
        let start = self.start_or_default(start);
        let total_days = days_in_shamsi_month(year, month)?;
        let first = ShamsiDate::from_parts_unchecked(year, month, 1);
        let leading_padding = first.weekday().days_since(start.weekday());

        let mut rows = Vec::new();
        let mut row = [None; WEEK_LEN];
        let mut column = leading_padding;
        for day in 1..=total_days {
            row[usize::from(column)] = Some(ShamsiDate::from_parts_unchecked(year, month, day));
            column += 1;
            if column == DAYS_IN_WEEK {
                rows.push(row);
                row = [None; WEEK_LEN];
                column = 0;
            }
        }
        let trailing_padding = if column == 0 {
            0
        } else {
            rows.push(row);
            DAYS_IN_WEEK - column
        };
        tracing::trace!(year, month, %start, rows = rows.len(), "month grid");

        Ok(MonthGrid {
            year,
            month,
            start_of_week: start,
            leading_padding,
            trailing_padding,
            rows,
        })
    }

    /// Both calendars' dates and the weekday of one day.
    ///
    /// # Errors
    /// Returns `CalendarError::PolicyRangeExceeded` if the year is outside the configured range.
    pub fn day_view(&self, date: ShamsiDate) -> Result<DayView, CalendarError> {
        self.config.year_range.check(date.year())?;
        Self::day_view_unchecked(date)
    }

    fn day_view_unchecked(date: ShamsiDate) -> Result<DayView, CalendarError> {
        let jd: JulianDay = date.to_julian_day();
        let weekday = jd.weekday();
        Ok(DayView {
            shamsi: date,
            gregorian: GregorianDate::from_julian_day(jd)?,
            weekday,
            is_weekend: weekday.is_weekend(),
        })
    }

    /// Day views of the week containing `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::PolicyRangeExceeded` if the year is outside the configured range.
    pub fn week_view(
        &self,
        date: ShamsiDate,
        start: Option<StartOfWeek>,
    ) -> Result<WeekView, CalendarError> {
        let dates = self.week_dates(date, start)?;
        let days = dates
            .iter()
            .map(|&d| Self::day_view_unchecked(d))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WeekView {
            week_number: (date.ordinal() - 1) / u16::from(DAYS_IN_WEEK) + 1,
            start: dates[0],
            end: dates[WEEK_LEN - 1],
            days,
        })
    }

    /// Statistics and week views of a month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for a month outside 1-12 and
    /// `CalendarError::PolicyRangeExceeded` if the year is outside the configured range.
    pub fn month_view(
        &self,
        year: i32,
        month: u8,
        start: Option<StartOfWeek>,
    ) -> Result<MonthView, CalendarError> {
        let statistics = self.month_statistics(year, month)?;
        let weeks = (1..=statistics.total_days)
            .step_by(WEEK_LEN)
            .map(|day| {
                self.week_view(ShamsiDate::from_parts_unchecked(year, month, day), start)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MonthView {
            year,
            month,
            total_days: statistics.total_days,
            start_weekday: statistics.start_weekday,
            weeks,
            statistics,
        })
    }

    /// Month summaries and statistics of a year.
    ///
    /// # Errors
    /// Returns `CalendarError::PolicyRangeExceeded` if the year is outside the configured range.
    pub fn year_view(&self, year: i32) -> Result<YearView, CalendarError> {
        let month_stats = self.months_of_year(year)?;
        let statistics = Self::sum_months(year, &month_stats);
        let months = (1..=HUT)
            .zip(&month_stats)
            .map(|(month, stats)| MonthSummary {
                month,
                total_days: stats.total_days,
                start_weekday: stats.start_weekday,
            })
            .collect();

        Ok(YearView {
            year,
            is_leap_year: statistics.is_leap_year,
            total_days: statistics.total_days,
            months,
            statistics,
        })
    }
}
