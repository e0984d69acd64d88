//! Month grid arithmetic and the canonical date format
//!
//! The calendar exchanges dates with its owner as `DD.MM.YYYY` strings,
//! mirroring the time picker's parse-or-retain policy: unparseable input
//! is ignored, formatting happens only on emission.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// Canonical date format exchanged at the calendar boundary
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Years shown per page of the year quick-select
pub const YEAR_PAGE_LEN: usize = 20;

/// Parse a canonical date string
///
/// Surrounding whitespace is tolerated; anything else that does not
/// parse yields `None` and the caller retains its state.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Format a date as the canonical string
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    add_months(first, 1).pred_opt().unwrap_or(first)
}

/// Shift a date by whole months, clamping the day when the target month
/// is shorter
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let shifted = if delta >= 0 {
        date.checked_add_months(Months::new(delta as u32))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Full-week grid for the month containing `date`, Monday first
///
/// The grid always spans whole weeks, so the first and last rows may
/// contain days from the neighboring months.
pub fn month_grid(date: NaiveDate) -> Vec<[NaiveDate; 7]> {
    let first = month_start(date);
    let last = month_end(date);
    let lead = first.weekday().num_days_from_monday() as i64;
    let mut day = first - Duration::days(lead);

    let mut weeks = Vec::with_capacity(6);
    while day <= last {
        let mut week = [day; 7];
        for slot in week.iter_mut() {
            *slot = day;
            day = day.succ_opt().unwrap_or(day);
        }
        weeks.push(week);
    }
    weeks
}

/// First year of the page holding `year`, shifted by `page` pages
///
/// Pages are aligned to multiples of [`YEAR_PAGE_LEN`], so paging from
/// 2025 walks 2020, 2040, 2000 rather than arbitrary offsets.
pub fn year_page_start(year: i32, page: i32) -> i32 {
    year.div_euclid(YEAR_PAGE_LEN as i32) * YEAR_PAGE_LEN as i32 + page * YEAR_PAGE_LEN as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_canonical_round_trip() {
        let parsed = parse_date("07.03.2026").unwrap();
        assert_eq!(parsed, date(2026, 3, 7));
        assert_eq!(format_date(parsed), "07.03.2026");
        assert_eq!(parse_date(" 01.01.2000 "), Some(date(2000, 1, 1)));
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        for input in ["2026-03-07", "32.01.2026", "07.13.2026", "abc", ""] {
            assert!(parse_date(input).is_none(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_month_grid_is_monday_first_and_complete() {
        // June 2026 starts on a Monday and ends on a Tuesday
        let weeks = month_grid(date(2026, 6, 15));
        assert_eq!(weeks.first().unwrap()[0], date(2026, 6, 1));
        assert_eq!(weeks.len(), 5);
        let days: Vec<NaiveDate> = weeks.iter().flatten().copied().collect();
        for d in 1..=30 {
            assert!(days.contains(&date(2026, 6, d)));
        }
        // trailing outside days fill the last week
        assert_eq!(weeks.last().unwrap()[6], date(2026, 7, 5));
    }

    #[test]
    fn test_month_grid_leading_outside_days() {
        // March 2026 starts on a Sunday, so the first row is mostly February
        let weeks = month_grid(date(2026, 3, 1));
        assert_eq!(weeks.first().unwrap()[0], date(2026, 2, 23));
        assert_eq!(weeks.first().unwrap()[6], date(2026, 3, 1));
    }

    #[test]
    fn test_add_months_clamps_and_crosses_years() {
        assert_eq!(add_months(date(2026, 1, 31), 1), date(2026, 2, 28));
        assert_eq!(add_months(date(2026, 1, 15), -1), date(2025, 12, 15));
        assert_eq!(add_months(date(2025, 12, 1), 1), date(2026, 1, 1));
    }

    #[test]
    fn test_month_end() {
        assert_eq!(month_end(date(2026, 2, 10)), date(2026, 2, 28));
        assert_eq!(month_end(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(month_end(date(2026, 12, 31)), date(2026, 12, 31));
    }

    #[test]
    fn test_year_pages_align_to_multiples_of_twenty() {
        assert_eq!(year_page_start(2025, 0), 2020);
        assert_eq!(year_page_start(2025, 1), 2040);
        assert_eq!(year_page_start(2025, -1), 2000);
        assert_eq!(year_page_start(2040, 0), 2040);
    }
}
