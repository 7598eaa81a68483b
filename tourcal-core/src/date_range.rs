//! Inclusive calendar date ranges.

use chrono::NaiveDate;

use crate::booking::Booking;
use crate::error::{TourCalError, TourCalResult};

/// Date range, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Build a range; reversed bounds are swapped.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        if from <= to {
            DateRange { from, to }
        } else {
            DateRange { from: to, to: from }
        }
    }

    /// Parse `YYYY-MM-DD` bounds.
    pub fn from_args(from: &str, to: &str) -> TourCalResult<Self> {
        Ok(DateRange::new(parse_date(from)?, parse_date(to)?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Bookings dated inside the range, in source order.
    pub fn filter<'a>(&self, bookings: &'a [Booking]) -> Vec<&'a Booking> {
        bookings
            .iter()
            .filter(|b| b.day().is_some_and(|d| self.contains(d)))
            .collect()
    }
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> TourCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TourCalError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::booking;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_args_parses_and_orders() {
        let range = DateRange::from_args("2025-06-30", "2025-06-01").unwrap();
        assert_eq!(range.from, date(2025, 6, 1));
        assert_eq!(range.to, date(2025, 6, 30));
        assert_eq!(range.days(), 30);
    }

    #[test]
    fn from_args_rejects_garbage() {
        let err = DateRange::from_args("june", "2025-06-01").unwrap_err();
        assert!(matches!(err, TourCalError::InvalidDate(ref s) if s == "june"));
    }

    #[test]
    fn filter_is_inclusive_and_skips_bad_dates() {
        let bookings = vec![
            booking("a", "2025-05-31", None),
            booking("b", "2025-06-01", None),
            booking("c", "2025-06-30T18:00:00", None),
            booking("d", "2025-07-01", None),
            booking("e", "", None),
        ];
        let range = DateRange::new(date(2025, 6, 1), date(2025, 6, 30));
        let ids: Vec<_> = range.filter(&bookings).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}
