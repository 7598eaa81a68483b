//! Grid construction for month, week and day views.

use chrono::{Datelike, Days, NaiveDate};

/// Month grids are always 6 rows of 7 days.
pub const MONTH_GRID_LEN: usize = 42;

const DEFAULT_FIRST_HOUR: u32 = 8;
const DEFAULT_LAST_HOUR: u32 = 18;

/// Hours shown in the day view, both ends inclusive.
///
/// Only built through [`HourRange::new`] or `Default`, so `first <= last <= 23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    first: u32,
    last: u32,
}

impl Default for HourRange {
    /// 08:00 through 18:00
    fn default() -> Self {
        HourRange {
            first: DEFAULT_FIRST_HOUR,
            last: DEFAULT_LAST_HOUR,
        }
    }
}

impl HourRange {
    /// Build a range, clamping to 0..=23 and swapping reversed bounds.
    pub fn new(first: u32, last: u32) -> Self {
        let first = first.min(23);
        let last = last.min(23);
        if first <= last {
            HourRange { first, last }
        } else {
            HourRange {
                first: last,
                last: first,
            }
        }
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    /// Number of hour slots in the range.
    pub fn slots(&self) -> usize {
        self.last.saturating_sub(self.first) as usize + 1
    }
}

/// First day of the month containing `date`.
pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Monday of the week containing `date`.
pub(crate) fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Number of days in the month containing `date`.
pub(crate) fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };

    match next {
        Some(next) => (next - first).num_days() as u32,
        // Only reachable for the last month chrono can represent
        None => 31,
    }
}

/// The 42 dates of the Monday-first month grid containing `reference`.
///
/// Leading days come from the end of the previous month, trailing days from
/// the start of the next, so the grid has the same shape whether the month
/// needs 4, 5 or 6 rows.
pub fn build_month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    let offset = first.weekday().num_days_from_monday();

    let mut days = Vec::with_capacity(MONTH_GRID_LEN);

    for back in (1..=offset).rev() {
        if let Some(day) = first.checked_sub_days(Days::new(u64::from(back))) {
            days.push(day);
        }
    }

    days.extend(first.iter_days().take(days_in_month(first) as usize));

    let remaining = MONTH_GRID_LEN.saturating_sub(days.len());
    if let Some(last) = days.last().copied() {
        days.extend(last.iter_days().skip(1).take(remaining));
    }

    days
}

/// The Monday-to-Sunday week containing `reference`.
pub fn build_week_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    monday_of_week(reference).iter_days().take(7).collect()
}

/// Hour markers for the day view.
pub fn build_day_grid(range: HourRange) -> Vec<u32> {
    (range.first..=range.last).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_grid_is_42_consecutive_days() {
        for year in [2023, 2024, 2025, 2026] {
            for month in 1..=12 {
                let grid = build_month_grid(date(year, month, 15));
                assert_eq!(grid.len(), MONTH_GRID_LEN, "{year}-{month}");
                for pair in grid.windows(2) {
                    assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
                }
                assert_eq!(grid[0].weekday(), Weekday::Mon);
            }
        }
    }

    #[test]
    fn month_grid_contains_whole_month() {
        let cases = [
            (2025, 2, 28),
            (2024, 2, 29),
            (2025, 4, 30),
            (2025, 6, 30),
            (2025, 12, 31),
            (2026, 1, 31),
        ];
        for (year, month, expected) in cases {
            let grid = build_month_grid(date(year, month, 1));
            let in_month = grid
                .iter()
                .filter(|d| d.year() == year && d.month() == month)
                .count();
            assert_eq!(in_month, expected, "{year}-{month}");
        }
    }

    #[test]
    fn month_grid_june_2025_starts_on_sunday() {
        // 1 June 2025 is a Sunday: six leading May days
        let grid = build_month_grid(date(2025, 6, 20));
        assert_eq!(grid[0], date(2025, 5, 26));
        assert_eq!(grid[6], date(2025, 6, 1));
        assert_eq!(grid[35], date(2025, 6, 30));
        assert_eq!(grid[41], date(2025, 7, 6));
    }

    #[test]
    fn month_grid_starting_on_monday_has_no_leading_days() {
        // 1 September 2025 is a Monday
        let grid = build_month_grid(date(2025, 9, 30));
        assert_eq!(grid[0], date(2025, 9, 1));
        assert_eq!(grid[41], date(2025, 10, 12));
    }

    #[test]
    fn february_on_monday_still_fills_six_rows() {
        // February 2021 fits exactly four rows
        let grid = build_month_grid(date(2021, 2, 10));
        assert_eq!(grid[0], date(2021, 2, 1));
        assert_eq!(grid[27], date(2021, 2, 28));
        assert_eq!(grid[41], date(2021, 3, 14));
    }

    #[test]
    fn month_grid_across_year_boundary() {
        let grid = build_month_grid(date(2025, 1, 15));
        // 1 January 2025 is a Wednesday
        assert_eq!(grid[0], date(2024, 12, 30));
        assert_eq!(grid[2], date(2025, 1, 1));
    }

    #[test]
    fn week_grid_is_monday_to_sunday() {
        let reference = date(2025, 6, 1); // Sunday
        let week = build_week_grid(reference);
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], date(2025, 5, 26));
        assert_eq!(week[0].weekday(), Weekday::Mon);
        assert_eq!(week[6].weekday(), Weekday::Sun);
        assert!(week.contains(&reference));
    }

    #[test]
    fn week_grid_contains_reference_for_every_weekday() {
        let mut day = date(2025, 3, 1);
        for _ in 0..14 {
            let week = build_week_grid(day);
            assert_eq!(week[0].weekday(), Weekday::Mon);
            assert!(week.contains(&day));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn default_day_grid_has_eleven_slots() {
        let hours = build_day_grid(HourRange::default());
        assert_eq!(hours.len(), 11);
        assert_eq!(hours.first(), Some(&8));
        assert_eq!(hours.last(), Some(&18));
    }

    #[test]
    fn hour_range_normalizes_bounds() {
        let swapped = HourRange::new(18, 8);
        assert_eq!((swapped.first(), swapped.last()), (8, 18));
        assert_eq!(swapped, HourRange::default());
        let clamped = HourRange::new(6, 30);
        assert_eq!((clamped.first(), clamped.last()), (6, 23));
        assert_eq!(HourRange::new(9, 9).slots(), 1);
        assert_eq!(HourRange::new(30, 40).slots(), 1);
        assert_eq!(HourRange::new(0, 23).slots(), 24);
    }

    #[test]
    fn days_in_month_handles_december() {
        assert_eq!(days_in_month(date(2025, 12, 25)), 31);
        assert_eq!(days_in_month(date(2024, 2, 2)), 29);
    }
}
