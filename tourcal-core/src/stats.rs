//! Headline booking counts for the admin calendar.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::booking::{Booking, BookingStatus};
use crate::calendar::is_in_month;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BookingStats {
    pub this_month: usize,
    pub this_week: usize,
    pub today: usize,
    /// Confirmed share of this month's bookings, 0-100
    pub occupancy: u32,
}

impl BookingStats {
    /// Count bookings relative to `today`.
    ///
    /// Weeks run Monday to Sunday. Bookings with an unreadable date are
    /// not counted anywhere.
    pub fn compute(bookings: &[Booking], today: NaiveDate) -> Self {
        let week = today.iso_week();
        let mut stats = BookingStats::default();
        let mut confirmed_this_month = 0usize;

        for booking in bookings {
            let Some(day) = booking.day() else {
                continue;
            };

            if is_in_month(day, today) {
                stats.this_month += 1;
                if booking.status == BookingStatus::Confirmed {
                    confirmed_this_month += 1;
                }
            }
            if day.iso_week() == week {
                stats.this_week += 1;
            }
            if day == today {
                stats.today += 1;
            }
        }

        if stats.this_month > 0 {
            let ratio = confirmed_this_month as f64 / stats.this_month as f64;
            stats.occupancy = (ratio * 100.0).round() as u32;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{booking, with_status};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_month_week_and_today() {
        // Wednesday 11 June 2025; week is 9-15 June
        let today = date(2025, 6, 11);
        let bookings = vec![
            booking("a", "2025-06-11", Some("09:00")),
            booking("b", "2025-06-11T14:00:00", None),
            with_status(booking("c", "2025-06-09", None), BookingStatus::Pending),
            with_status(booking("d", "2025-06-15", None), BookingStatus::Cancelled),
            booking("e", "2025-06-01", None),
            booking("f", "2025-06-16", None),
            booking("g", "2025-07-01", None),
            booking("h", "2024-06-11", None),
            booking("bad", "", None),
        ];

        let stats = BookingStats::compute(&bookings, today);
        assert_eq!(stats.today, 2);
        assert_eq!(stats.this_week, 4);
        assert_eq!(stats.this_month, 6);
        // 4 of 6 confirmed
        assert_eq!(stats.occupancy, 67);
    }

    #[test]
    fn week_spans_month_boundary() {
        // Sunday 1 June 2025; its week starts Monday 26 May
        let today = date(2025, 6, 1);
        let bookings = vec![
            booking("a", "2025-05-26", None),
            booking("b", "2025-06-01", None),
            booking("c", "2025-06-02", None),
        ];

        let stats = BookingStats::compute(&bookings, today);
        assert_eq!(stats.this_week, 2);
        assert_eq!(stats.this_month, 2);
    }

    #[test]
    fn empty_input_has_zero_occupancy() {
        let stats = BookingStats::compute(&[], date(2025, 6, 1));
        assert_eq!(stats, BookingStats::default());
    }
}
