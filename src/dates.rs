//! Calendar helpers on top of [`chrono`].
use alloc::format;
use alloc::string::String;

use chrono::Datelike;

/// Determines whether `year` is a leap year in the (proleptic)
/// Gregorian calendar.
#[inline(always)]
pub fn year_is_leap(year: i32) -> bool {
    if year % 100 == 0 {
        year % 400 == 0
    } else {
        year % 4 == 0
    }
}

/// Formats the calendar date of `date` as `year-MM-DD`; any time of
/// day is ignored.
///
/// The month and day are zero-padded to two digits, but the year is
/// printed as is (e.g., `4-01-01`).  Pass a `DateTime<Local>` to
/// format the date in the local time zone.
///
/// ```
/// # use primkit::dates::format_simple_date;
/// let date = chrono::NaiveDate::from_ymd_opt(2012, 2, 3).unwrap();
/// assert_eq!(format_simple_date(&date), "2012-02-03");
/// ```
pub fn format_simple_date(date: &impl Datelike) -> String {
    format!("{}-{:02}-{:02}", date.year(), date.month(), date.day())
}
