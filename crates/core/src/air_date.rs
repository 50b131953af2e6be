//! Broadcast date formatting.
//!
//! Episode air dates render as `M/D/YY`: no leading zeros on the month or
//! day, two-digit year. Chrono's strftime has no portable no-pad specifier,
//! so the format is spelled out.

use chrono::{Datelike, NaiveDate};

/// Format an episode air date for API responses.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lateshow_core::air_date::format_air_date;
///
/// let date = NaiveDate::from_ymd_opt(1999, 11, 1).unwrap();
/// assert_eq!(format_air_date(date), "11/1/99");
///
/// let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// assert_eq!(format_air_date(date), "1/1/00");
/// ```
pub fn format_air_date(date: NaiveDate) -> String {
    format!("{}/{}/{:02}", date.month(), date.day(), date.year() % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn strips_leading_zeros_from_month_and_day() {
        assert_eq!(format_air_date(ymd(2000, 2, 1)), "2/1/00");
        assert_eq!(format_air_date(ymd(1999, 11, 1)), "11/1/99");
    }

    #[test]
    fn keeps_two_digit_values_intact() {
        assert_eq!(format_air_date(ymd(2009, 10, 31)), "10/31/09");
    }

    #[test]
    fn pads_single_digit_years() {
        assert_eq!(format_air_date(ymd(2000, 1, 1)), "1/1/00");
        assert_eq!(format_air_date(ymd(2005, 6, 7)), "6/7/05");
    }
}
