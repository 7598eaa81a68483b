//! Today / past / in-month predicates.
//!
//! "Today" is the local calendar date, not an instant. The `_at` variants
//! take it explicitly so views can be projected for a fixed day.

use chrono::{Datelike, Local, NaiveDate};

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_today(date: NaiveDate) -> bool {
    is_today_at(date, today())
}

pub fn is_today_at(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Strictly before today; today itself is not past.
pub fn is_past(date: NaiveDate) -> bool {
    is_past_at(date, today())
}

pub fn is_past_at(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Same month and year as `reference`. Used to dim leading and trailing days.
pub fn is_in_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_is_not_past() {
        let now = date(2025, 6, 15);
        assert!(is_today_at(now, now));
        assert!(!is_past_at(now, now));
        assert!(is_past_at(date(2025, 6, 14), now));
        assert!(!is_past_at(date(2025, 6, 16), now));
    }

    #[test]
    fn wall_clock_helpers_agree_with_today() {
        let now = today();
        assert!(is_today(now));
        assert!(!is_past(now));
        assert!(is_past(now.pred_opt().unwrap()));
    }

    #[test]
    fn in_month_checks_year_too() {
        let reference = date(2025, 6, 15);
        assert!(is_in_month(date(2025, 6, 1), reference));
        assert!(!is_in_month(date(2025, 5, 31), reference));
        assert!(!is_in_month(date(2024, 6, 1), reference));
    }
}
