//! ICS encoding of exported events and decoding of what's already there.

use chrono::Utc;
use chrono_tz::Tz;
use icalendar::{
    Calendar, Component, Property,
    parser::{read_calendar, unfold},
};

use super::{ExistingEvent, SyncEvent};

const DATETIME_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Generate .ics content for one event, with times in `tz` wall clock.
pub fn generate_ics(event: &SyncEvent, tz: Tz) -> String {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.summary);
    ics_event.description(&event.description);

    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    for (name, at) in [("DTSTART", event.start), ("DTEND", event.end)] {
        let mut prop = Property::new(name, at.format(DATETIME_FORMAT).to_string());
        prop.add_parameter("TZID", tz.name());
        ics_event.append_property(prop);
    }

    if let Some(ref email) = event.attendee {
        let prop = Property::new("ATTENDEE", format!("mailto:{email}"));
        ics_event.append_multi_property(prop);
    }

    let mut cal = Calendar::new();
    cal.push(ics_event.done());

    strip_ics_bloat(&cal.done().to_string())
}

/// Read the fields used for duplicate detection; `None` if there's no VEVENT.
pub fn parse_existing(content: &str) -> Option<ExistingEvent> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).ok()?;
    let vevent = calendar.components.iter().find(|c| c.name == "VEVENT")?;

    Some(ExistingEvent {
        uid: vevent.find_prop("UID").map(|p| p.val.to_string()),
        summary: vevent
            .find_prop("SUMMARY")
            .map(|p| p.val.to_string())
            .unwrap_or_default(),
        description: vevent
            .find_prop("DESCRIPTION")
            .map(|p| p.val.to_string())
            .unwrap_or_default(),
    })
}

/// Fixed PRODID, no CALSCALE line.
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:TOURCAL\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::booking;
    use chrono::Duration;

    fn event() -> SyncEvent {
        let mut b = booking("b-7", "2025-06-01", Some("10:00"));
        b.customer_email = Some("guest@example.com".to_string());
        SyncEvent::from_booking(&b, Duration::hours(2)).unwrap()
    }

    #[test]
    fn generated_ics_has_zoned_times() {
        let ics = generate_ics(&event(), chrono_tz::Europe::Istanbul);

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.contains("PRODID:TOURCAL\r\n"));
        assert!(!ics.contains("CALSCALE"));
        assert!(ics.contains("UID:b-7@tourcal\r\n"));
        assert!(ics.contains("SUMMARY:Jeep Safari - Customer b-7\r\n"));
        assert!(ics.contains("DTSTART;TZID=Europe/Istanbul:20250601T100000\r\n"));
        assert!(ics.contains("DTEND;TZID=Europe/Istanbul:20250601T120000\r\n"));
        assert!(ics.contains("ATTENDEE:mailto:guest@example.com\r\n"));
    }

    #[test]
    fn generated_ics_parses_back() {
        let ics = generate_ics(&event(), chrono_tz::Europe::Istanbul);
        let existing = parse_existing(&ics).unwrap();

        assert_eq!(existing.uid.as_deref(), Some("b-7@tourcal"));
        assert_eq!(existing.summary, "Jeep Safari - Customer b-7");
        assert!(existing.description.contains("b-7"));
        assert!(existing.is_for("b-7"));
    }

    #[test]
    fn parse_without_vevent() {
        let ics = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";
        assert_eq!(parse_existing(ics), None);
    }
}
