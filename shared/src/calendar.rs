//! Calendar grid generation.
//!
//! Months are zero-based (`0` = January) and weeks start on Monday. All date
//! arithmetic is done on the proleptic Gregorian calendar with astronomical
//! year numbering, so year `0` and negative years are valid inputs.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// Three-letter month abbreviations, indexed by zero-based month
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Number of cells in one grid row
pub const DAYS_PER_WEEK: usize = 7;

/// Calendar facts about a single month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInfo {
    pub year: i32,
    /// Zero-based month
    pub month: u32,
    pub month_name: String,
    pub days_in_month: u32,
    /// Weekday of the 1st, 0 = Monday .. 6 = Sunday
    pub first_day_of_week: u32,
}

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub date: Option<u32>,
    /// Highlight colour for the cell; the grid builder never sets one
    pub color: Option<String>,
    pub is_empty: bool,
    pub is_current_month: bool,
    /// Cell belongs to the previous or next month
    pub is_overflow: bool,
}

impl Day {
    fn current(date: u32) -> Self {
        Self {
            date: Some(date),
            color: None,
            is_empty: false,
            is_current_month: true,
            is_overflow: false,
        }
    }

    fn overflow(date: u32) -> Self {
        Self {
            date: Some(date),
            color: None,
            is_empty: false,
            is_current_month: false,
            is_overflow: true,
        }
    }
}

/// A month laid out as complete Monday-first weeks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarData {
    pub month_name: String,
    pub year: i32,
    pub month: u32,
    pub days: Vec<Day>,
}

impl CalendarData {
    /// Grid rows of exactly seven cells
    pub fn weeks(&self) -> impl Iterator<Item = &[Day]> {
        self.days.chunks(DAYS_PER_WEEK)
    }
}

/// Year and zero-based month of the local system clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentMonth {
    pub year: i32,
    pub month: u32,
}

impl CurrentMonth {
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            year: now.year(),
            month: now.month0(),
        }
    }
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Carry an out-of-range month into the following years, the way host date
/// arithmetic does (`(2024, 12)` is January 2025).
pub fn normalize_month(year: i32, month: u32) -> (i32, u32) {
    (year + (month / 12) as i32, month % 12)
}

/// Number of days in a zero-based month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (year, month) = normalize_month(year, month);
    match month {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday of a date, 0 = Sunday .. 6 = Saturday.
///
/// `month` is zero-based and `day` one-based.
pub fn day_of_week(year: i32, month: u32, day: u32) -> u32 {
    const MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let (year, month) = normalize_month(year, month);
    // January and February count as months of the previous year
    let y = i64::from(year) - i64::from(month < 2);
    let days = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + MONTH_OFFSETS[month as usize]
        + i64::from(day);

    days.rem_euclid(7) as u32
}

/// Month name, length and Monday-indexed starting weekday
pub fn get_date_info(year: i32, month: u32) -> DateInfo {
    let (year, month) = normalize_month(year, month);
    let sunday_first = day_of_week(year, month, 1);

    DateInfo {
        year,
        month,
        month_name: MONTH_NAMES[month as usize].to_string(),
        days_in_month: days_in_month(year, month),
        first_day_of_week: (sunday_first + 6) % 7,
    }
}

/// The month before, rolling into the previous year from January
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    let (year, month) = normalize_month(year, month);
    if month == 0 {
        (year - 1, 11)
    } else {
        (year, month - 1)
    }
}

/// The month after, rolling into the next year from December
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    let (year, month) = normalize_month(year, month);
    if month == 11 {
        (year + 1, 0)
    } else {
        (year, month + 1)
    }
}

/// Build the padded day grid for a month.
///
/// Leading cells carry the last days of the previous month. Trailing cells
/// are numbered from 1 until the grid closes on a full week; the following
/// month's length is never consulted.
pub fn get_calendar_data(year: i32, month: u32) -> CalendarData {
    let date_info = get_date_info(year, month);
    // December precedes January in every year, so no year arithmetic is needed
    let prev_days_in_month = match date_info.month {
        0 => 31,
        month => days_in_month(date_info.year, month - 1),
    };

    let leading = date_info.first_day_of_week;
    let filled = leading as usize + date_info.days_in_month as usize;
    let trailing = (DAYS_PER_WEEK - filled % DAYS_PER_WEEK) % DAYS_PER_WEEK;

    let mut days = Vec::with_capacity(filled + trailing);
    days.extend((prev_days_in_month - leading + 1..=prev_days_in_month).map(Day::overflow));
    days.extend((1..=date_info.days_in_month).map(Day::current));
    days.extend((1..=trailing as u32).map(Day::overflow));

    CalendarData {
        month_name: date_info.month_name,
        year: date_info.year,
        month: date_info.month,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leading_overflow(calendar: &CalendarData) -> usize {
        calendar.days.iter().take_while(|d| d.is_overflow).count()
    }

    fn trailing_overflow(calendar: &CalendarData) -> usize {
        calendar.days.iter().rev().take_while(|d| d.is_overflow).count()
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 0), 31);
        assert_eq!(days_in_month(2025, 3), 30);
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2025, 11), 31);
    }

    #[test]
    fn test_day_of_week_known_dates() {
        assert_eq!(day_of_week(2024, 1, 1), 4); // Thursday
        assert_eq!(day_of_week(2023, 1, 1), 3); // Wednesday
        assert_eq!(day_of_week(2000, 0, 1), 6); // Saturday
        assert_eq!(day_of_week(1970, 0, 1), 4); // Thursday
        assert_eq!(day_of_week(2026, 9, 19), 1); // Monday
    }

    #[test]
    fn test_day_of_week_year_zero_and_negative() {
        // 0000-01-01 is a Saturday in the proleptic Gregorian calendar
        assert_eq!(day_of_week(0, 0, 1), 6);
        // 0000-03-01 is a Wednesday
        assert_eq!(day_of_week(0, 2, 1), 3);
        // -0001-12-31 is the Friday before
        assert_eq!(day_of_week(-1, 11, 31), 5);
    }

    #[test]
    fn test_get_date_info_leap_february() {
        let info = get_date_info(2024, 1);

        assert_eq!(info.year, 2024);
        assert_eq!(info.month, 1);
        assert_eq!(info.month_name, "Feb");
        assert_eq!(info.days_in_month, 29);
        assert_eq!(info.first_day_of_week, 3);
    }

    #[test]
    fn test_get_date_info_sunday_maps_to_six() {
        // 2015-02-01 was a Sunday
        let info = get_date_info(2015, 1);
        assert_eq!(info.first_day_of_week, 6);
    }

    #[test]
    fn test_get_date_info_carries_overflowing_month() {
        let info = get_date_info(2024, 12);

        assert_eq!(info.year, 2025);
        assert_eq!(info.month, 0);
        assert_eq!(info.month_name, "Jan");
    }

    #[test]
    fn test_calendar_leap_february() {
        let calendar = get_calendar_data(2024, 1);

        assert_eq!(calendar.month_name, "Feb");
        assert_eq!(calendar.days.len(), 35);
        assert_eq!(leading_overflow(&calendar), 3);
        assert_eq!(trailing_overflow(&calendar), 3);

        let leading: Vec<_> = calendar.days[..3].iter().map(|d| d.date).collect();
        assert_eq!(leading, vec![Some(29), Some(30), Some(31)]);

        let trailing: Vec<_> = calendar.days[32..].iter().map(|d| d.date).collect();
        assert_eq!(trailing, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_calendar_non_leap_february() {
        let calendar = get_calendar_data(2023, 1);

        assert_eq!(calendar.days.len(), 35);
        assert_eq!(leading_overflow(&calendar), 2);
        assert_eq!(trailing_overflow(&calendar), 5);
        assert_eq!(
            calendar.days.iter().filter(|d| d.is_current_month).count(),
            28
        );
    }

    #[test]
    fn test_calendar_without_padding() {
        // February 2021 starts on a Monday and ends on a Sunday
        let calendar = get_calendar_data(2021, 1);

        assert_eq!(calendar.days.len(), 28);
        assert!(calendar.days.iter().all(|d| d.is_current_month));
        assert_eq!(calendar.weeks().count(), 4);
    }

    #[test]
    fn test_calendar_january_uses_previous_december() {
        // 2025-01-01 is a Wednesday, so Dec 30 and 31 of 2024 lead
        let calendar = get_calendar_data(2025, 0);

        let leading: Vec<_> = calendar
            .days
            .iter()
            .take_while(|d| d.is_overflow)
            .map(|d| d.date)
            .collect();
        assert_eq!(leading, vec![Some(30), Some(31)]);
    }

    #[test]
    fn test_calendar_six_week_month() {
        // March 2025 starts on a Saturday: 5 leading + 31 days = 36 cells
        let calendar = get_calendar_data(2025, 2);

        assert_eq!(calendar.days.len(), 42);
        assert_eq!(leading_overflow(&calendar), 5);
        assert_eq!(trailing_overflow(&calendar), 6);
    }

    #[test]
    fn test_calendar_cell_flags() {
        let calendar = get_calendar_data(2024, 1);

        for day in &calendar.days {
            assert!(!day.is_empty);
            assert!(day.color.is_none());
            assert_ne!(day.is_current_month, day.is_overflow);
            assert!(day.date.is_some());
        }

        let current: Vec<u32> = calendar
            .days
            .iter()
            .filter(|d| d.is_current_month)
            .filter_map(|d| d.date)
            .collect();
        assert_eq!(current, (1..=29).collect::<Vec<_>>());
    }

    #[test]
    fn test_calendar_invariants_across_years() {
        for year in [i32::MIN, -401, -1, 0, 1, 1582, 1900, 1999, 2000, 2023, 2024, 2100, 9999, i32::MAX] {
            for month in 0..12 {
                let calendar = get_calendar_data(year, month);
                let info = get_date_info(year, month);

                assert_eq!(calendar.days.len() % DAYS_PER_WEEK, 0, "{year}-{month}");
                assert_eq!(
                    calendar.days.iter().filter(|d| d.is_current_month).count() as u32,
                    info.days_in_month,
                    "{year}-{month}"
                );
                assert_eq!(
                    leading_overflow(&calendar) as u32,
                    info.first_day_of_week,
                    "{year}-{month}"
                );
                assert!(trailing_overflow(&calendar) < DAYS_PER_WEEK);
            }
        }
    }

    #[test]
    fn test_january_of_lowest_year_uses_december_padding() {
        let calendar = get_calendar_data(i32::MIN, 0);
        let leading = leading_overflow(&calendar);

        assert_eq!(calendar.year, i32::MIN);
        if leading > 0 {
            assert_eq!(calendar.days[leading - 1].date, Some(31));
        }
    }

    #[test]
    fn test_consecutive_months_chain_weekdays() {
        // Each month starts the weekday after the previous month ends
        let mut year = 2023;
        let mut month = 0;
        for _ in 0..36 {
            let info = get_date_info(year, month);
            let (next_year, next_month_index) = next_month(year, month);
            let next = get_date_info(next_year, next_month_index);

            assert_eq!(
                (info.first_day_of_week + info.days_in_month) % 7,
                next.first_day_of_week
            );
            year = next_year;
            month = next_month_index;
        }
    }

    #[test]
    fn test_navigation() {
        assert_eq!(previous_month(2025, 5), (2025, 4));
        assert_eq!(previous_month(2025, 0), (2024, 11));
        assert_eq!(next_month(2025, 5), (2025, 6));
        assert_eq!(next_month(2025, 11), (2026, 0));
    }

    #[test]
    fn test_current_month_is_in_range() {
        let current = CurrentMonth::now();
        assert!(current.month < 12);
    }

    #[test]
    fn test_calendar_data_serializes_camel_case() {
        let calendar = get_calendar_data(2024, 1);
        let json = serde_json::to_value(&calendar).unwrap();

        assert_eq!(json["monthName"], "Feb");
        assert_eq!(json["days"][0]["isOverflow"], true);
        assert_eq!(json["days"][3]["isCurrentMonth"], true);
        assert!(json["days"][0]["color"].is_null());
    }
}
