//! Assigning bookings to day and hour buckets.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::booking::Booking;

/// Bookings whose date portion equals `date`, in source order.
///
/// Dates are compared as calendar dates, never as instants. Records with an
/// unreadable `booking_date` never match.
pub fn bookings_for_date(date: NaiveDate, bookings: &[Booking]) -> Vec<&Booking> {
    bookings.iter().filter(|b| b.day() == Some(date)).collect()
}

/// Bookings on `date` whose start time falls in `hour`.
///
/// Bookings without a readable `tour_start_time` are in no hour bucket; they
/// still show up in [`bookings_for_date`].
pub fn bookings_for_hour(date: NaiveDate, hour: u32, bookings: &[Booking]) -> Vec<&Booking> {
    bookings_for_date(date, bookings)
        .into_iter()
        .filter(|b| b.start_hour() == Some(hour))
        .collect()
}

/// Group bookings by day in a single pass.
///
/// Each booking lands in at most one entry; per-day order follows the
/// source. Used by the projector so a 42-cell grid doesn't rescan the whole
/// list per cell.
pub fn partition_by_day(bookings: &[Booking]) -> HashMap<NaiveDate, Vec<&Booking>> {
    let mut by_day: HashMap<NaiveDate, Vec<&Booking>> = HashMap::new();

    for booking in bookings {
        match booking.day() {
            Some(day) => by_day.entry(day).or_default().push(booking),
            None => debug!(
                booking.id = %booking.id,
                booking.date = %booking.booking_date,
                "skipping booking with unreadable date"
            ),
        }
    }

    by_day
}
