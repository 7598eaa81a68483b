//! One-way export of confirmed bookings to an external calendar.
//!
//! Each confirmed booking becomes a timed event. The target is a directory
//! of `.ics` files, one event per file; bookings already present there are
//! skipped so repeated exports don't duplicate events.

mod dir;
mod ics;

use chrono::{Duration, NaiveDateTime, NaiveTime};

pub use dir::{read_existing, write_event};
pub use ics::generate_ics;

use crate::booking::{Booking, BookingStatus, parse_start_hour};

/// Suffix appended to booking ids to form event UIDs.
const UID_DOMAIN: &str = "tourcal";

/// Description line carrying the booking id.
const BOOKING_ID_PREFIX: &str = "Booking ID: ";

/// A booking projected into a calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncEvent {
    pub uid: String,
    pub booking_id: String,
    pub summary: String,
    pub description: String,
    /// Venue wall-clock time
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub attendee: Option<String>,
}

impl SyncEvent {
    /// Project a booking, or `None` unless it is confirmed with a readable date.
    pub fn from_booking(booking: &Booking, duration: Duration) -> Option<Self> {
        if booking.status != BookingStatus::Confirmed {
            return None;
        }

        let day = booking.day()?;
        let start = day.and_time(start_time(booking.tour_start_time.as_deref()));

        Some(SyncEvent {
            uid: event_uid(&booking.id),
            booking_id: booking.id.clone(),
            summary: booking.to_string(),
            description: describe(booking),
            start,
            end: start + duration,
            attendee: booking.customer_email.clone(),
        })
    }
}

/// An event already present in the export target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExistingEvent {
    pub uid: Option<String>,
    pub summary: String,
    pub description: String,
}

impl ExistingEvent {
    /// True if this event was exported from `booking_id`.
    ///
    /// Matches the UID, or a description line that is exactly
    /// `Booking ID: {id}`. Descriptions read back from .ics files may still
    /// carry escaped `\n` separators.
    pub fn is_for(&self, booking_id: &str) -> bool {
        if self.uid.as_deref() == Some(event_uid(booking_id).as_str()) {
            return true;
        }

        self.description
            .replace("\\n", "\n")
            .lines()
            .any(|line| line.trim().strip_prefix(BOOKING_ID_PREFIX) == Some(booking_id))
    }
}

/// Events to create for `bookings`, skipping those already in `existing`.
pub fn plan_export(
    bookings: &[Booking],
    existing: &[ExistingEvent],
    duration: Duration,
) -> Vec<SyncEvent> {
    bookings
        .iter()
        .filter(|b| !existing.iter().any(|e| e.is_for(&b.id)))
        .filter_map(|b| SyncEvent::from_booking(b, duration))
        .collect()
}

pub fn event_uid(booking_id: &str) -> String {
    format!("{booking_id}@{UID_DOMAIN}")
}

/// Start of day when the time is missing or unreadable.
fn start_time(raw: Option<&str>) -> NaiveTime {
    let Some(raw) = raw else {
        return NaiveTime::MIN;
    };
    let Some(hour) = parse_start_hour(raw) else {
        return NaiveTime::MIN;
    };
    let minute = raw
        .split(':')
        .nth(1)
        .and_then(|m| m.trim().get(..2).or(Some(m.trim())))
        .and_then(|m| m.parse::<u32>().ok())
        .filter(|m| *m < 60)
        .unwrap_or(0);

    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn describe(booking: &Booking) -> String {
    let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| "N/A".to_string());
    format!(
        "{BOOKING_ID_PREFIX}{}\nCustomer: {}\nPhone: {}\nEmail: {}\nAdults: {}\nChildren: {}",
        booking.id,
        booking.customer_name,
        or_na(&booking.customer_phone),
        or_na(&booking.customer_email),
        booking.adults,
        booking.children
    )
}
