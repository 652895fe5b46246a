//! Administrative policy for the calendar views.
//!
//! Both types deserialize from any serde format with defaults for missing
//! fields, e.g. `{"yearRange": {"min": 1300, "max": 1500}, "startOfWeek": 3}`.

use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::types::StartOfWeek;
use crate::CalendarError;
use serde::{Deserialize, Serialize};

/// Inclusive range of years accepted by the administrative policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// The default policy, `1..=3000`
    pub const DEFAULT: Self = Self {
        min: MIN_YEAR,
        max: MAX_YEAR,
    };

    /// Creates a new range
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYearRange` if `min > max`.
    pub const fn new(min: i32, max: i32) -> Result<Self, CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidYearRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> i32 {
        self.min
    }

    pub const fn max(&self) -> i32 {
        self.max
    }

    pub const fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// Checks `year` against the range
    ///
    /// # Errors
    /// Returns `CalendarError::PolicyRangeExceeded` if the year is outside the range.
    pub fn check(&self, year: i32) -> Result<(), CalendarError> {
        if self.contains(year) {
            return Ok(());
        }
        tracing::debug!(year, min = self.min, max = self.max, "year outside policy range");
        Err(CalendarError::PolicyRangeExceeded {
            year,
            min: self.min,
            max: self.max,
        })
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for YearRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(default)]
        struct Bounds {
            min: i32,
            max: i32,
        }

        impl Default for Bounds {
            fn default() -> Self {
                Self {
                    min: MIN_YEAR,
                    max: MAX_YEAR,
                }
            }
        }

        let bounds = Bounds::deserialize(deserializer)?;
        Self::new(bounds.min, bounds.max).map_err(serde::de::Error::custom)
    }
}

/// Settings for a [`Calendar`](crate::Calendar) view generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarConfig {
    /// Years the views accept
    pub year_range: YearRange,
    /// First column used when a view is not given one explicitly
    pub start_of_week: StartOfWeek,
}
