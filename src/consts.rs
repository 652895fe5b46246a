/// Minimum year accepted by the default administrative policy (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum year accepted by the default administrative policy (inclusive)
pub const MAX_YEAR: i32 = 3000;

/// Number of months in both calendars
pub const MONTHS_IN_YEAR: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Hamal, the first Shamsi month
pub const HAMAL: u8 = 1;
/// Month number for Hut, the last Shamsi month
pub const HUT: u8 = 12;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Days in each Shamsi month of a common year (index 0 is unused, months are 1-indexed)
/// Hut shows 29 days (common year default)
pub const SHAMSI_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Hamal
    31, // Sawr
    31, // Jawza
    31, // Saratan
    31, // Asad
    31, // Sonbola
    30, // Mizan
    30, // Aqrab
    30, // Qaws
    30, // Jadi
    30, // Dalw
    29, // Hut (common year, adjusted by is_shamsi_leap_year check)
];

/// Days in Hut for leap years
pub const HUT_DAYS_LEAP: u8 = 30;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Length of the Shamsi intercalation cycle in years
pub const SHAMSI_CYCLE_YEARS: i32 = 33;

/// Positions within a 33-year cycle (year mod 33) that are leap years
pub const SHAMSI_LEAP_BREAK_POINTS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Leap days contributed by one full 33-year cycle
pub(crate) const SHAMSI_LEAP_DAYS_PER_CYCLE: i64 = SHAMSI_LEAP_BREAK_POINTS.len() as i64;

/// Days in one full 33-year cycle: 33 * 365 + 8
pub const SHAMSI_DAYS_PER_CYCLE: i64 = 12_053;

/// Julian Day Number of Shamsi 0001-01-01 (Gregorian 0622-03-21)
pub const SHAMSI_EPOCH: i64 = 1_948_320;

/// Days covered by the six 31-day months at the start of a Shamsi year
pub(crate) const SHAMSI_FIRST_HALF_DAYS: i64 = 186;
/// Last month with 31 days in the Shamsi calendar
pub(crate) const SHAMSI_LAST_LONG_MONTH: u8 = 6;

/// Offset aligning `jd mod 7` with the Saturday-first weekday numbering
pub(crate) const WEEKDAY_OFFSET: i64 = 2;

/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// Weekday numbers treated as non-working days (Friday)
pub const WEEKEND_DAYS: [u8; 1] = [7];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
