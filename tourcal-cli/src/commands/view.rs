use anyhow::Result;
use chrono::NaiveDate;
use tourcal_core::calendar::{CalendarObserver, CalendarProjector, Granularity, Navigator, today};
use tourcal_core::settings::Settings;
use tourcal_core::store::BookingStore;
use tracing::debug;

use crate::commands::{open_state, open_store};
use crate::render::render_view;
use crate::utils::dates::parse_date_input;

/// Logs navigation steps.
struct TraceObserver;

impl CalendarObserver for TraceObserver {
    fn navigated(&mut self, reference: NaiveDate, granularity: Granularity) {
        debug!(%reference, %granularity, "navigated");
    }
}

pub fn run(
    settings: &Settings,
    granularity: Granularity,
    date: Option<&str>,
    offset: i32,
) -> Result<()> {
    let start = match date {
        Some(input) => parse_date_input(input)?,
        None => today(),
    };

    let mut observer = TraceObserver;
    let mut navigator = Navigator::new(start, granularity).with_observer(&mut observer);
    let reference = navigator.jump(offset);

    let bookings = open_store(settings).list_bookings()?;
    let language = open_state(settings)?.language();

    let projector = CalendarProjector::new(settings.hour_range());
    let view = projector.project(reference, granularity, &bookings);

    debug!(
        %reference,
        shown = view.booking_count(),
        total = bookings.len(),
        "projected view"
    );

    println!("{}", render_view(&view, language));

    Ok(())
}
