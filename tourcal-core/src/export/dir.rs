//! Export directory access: one `.ics` file per event.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use tracing::{debug, warn};

use super::ics::{generate_ics, parse_existing};
use super::{ExistingEvent, SyncEvent};
use crate::error::{TourCalError, TourCalResult};

const MAX_COLLISIONS: usize = 100;

/// Events already present in `dir`. A missing directory holds none.
pub fn read_existing(dir: &Path) -> TourCalResult<Vec<ExistingEvent>> {
    let mut events = Vec::new();

    if !dir.exists() {
        return Ok(events);
    }

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().map(|e| e != "ics").unwrap_or(true) {
            continue;
        }

        if let Ok(content) = std::fs::read_to_string(&path)
            && let Some(event) = parse_existing(&content)
        {
            events.push(event);
        } else {
            warn!(path = %path.display(), "skipping unreadable calendar file");
        }
    }

    debug!(dir = %dir.display(), count = events.len(), "read existing events");
    Ok(events)
}

/// Write `event` into `dir` and return the new file's path.
pub fn write_event(dir: &Path, event: &SyncEvent, tz: Tz) -> TourCalResult<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = unique_path(dir, &base_filename(event))?;
    std::fs::write(&path, generate_ics(event, tz))?;

    debug!(path = %path.display(), booking.id = %event.booking_id, "wrote event");
    Ok(path)
}

/// `YYYY-MM-DDTHHMM__slug`
fn base_filename(event: &SyncEvent) -> String {
    format!(
        "{}__{}",
        event.start.format("%Y-%m-%dT%H%M"),
        slug::slugify(&event.summary)
    )
}

/// First of `base.ics`, `base-2.ics`, ... that doesn't exist yet.
fn unique_path(dir: &Path, base: &str) -> TourCalResult<PathBuf> {
    let path = dir.join(format!("{base}.ics"));
    if !path.exists() {
        return Ok(path);
    }

    for n in 2..=MAX_COLLISIONS {
        let path = dir.join(format!("{base}-{n}.ics"));
        if !path.exists() {
            return Ok(path);
        }
    }

    Err(TourCalError::Export(format!(
        "Too many file name collisions for '{base}'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::plan_export;
    use crate::testing::booking;
    use chrono::Duration;

    const TZ: Tz = chrono_tz::Europe::Istanbul;

    #[test]
    fn missing_dir_has_no_events() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_existing(&dir.path().join("nope")).unwrap().is_empty());
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let b = booking("b-1", "2025-06-01", Some("10:00"));
        let event = plan_export(&[b], &[], Duration::hours(2)).remove(0);

        let path = write_event(dir.path(), &event, TZ).unwrap();
        assert_eq!(
            path.file_name().unwrap(),
            "2025-06-01T1000__jeep-safari-customer-b-1.ics"
        );

        let existing = read_existing(dir.path()).unwrap();
        assert_eq!(existing.len(), 1);
        assert!(existing[0].is_for("b-1"));
    }

    #[test]
    fn second_export_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let bookings = vec![
            booking("a", "2025-06-01", Some("09:00")),
            booking("b", "2025-06-02", Some("11:00")),
        ];

        for event in plan_export(&bookings, &[], Duration::hours(2)) {
            write_event(dir.path(), &event, TZ).unwrap();
        }

        let existing = read_existing(dir.path()).unwrap();
        assert!(plan_export(&bookings, &existing, Duration::hours(2)).is_empty());
    }

    #[test]
    fn colliding_names_get_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = booking("x", "2025-06-01", Some("10:00"));
        first.customer_name = "Ayse".to_string();
        let mut second = first.clone();
        second.id = "y".to_string();

        let events = plan_export(&[first, second], &[], Duration::hours(2));
        let a = write_event(dir.path(), &events[0], TZ).unwrap();
        let b = write_event(dir.path(), &events[1], TZ).unwrap();

        assert_eq!(a.file_name().unwrap(), "2025-06-01T1000__jeep-safari-ayse.ics");
        assert_eq!(b.file_name().unwrap(), "2025-06-01T1000__jeep-safari-ayse-2.ics");
    }

    #[test]
    fn non_ics_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        std::fs::write(dir.path().join("broken.ics"), "not a calendar").unwrap();
        assert!(read_existing(dir.path()).unwrap().is_empty());
    }
}
