use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Duration;
use owo_colors::OwoColorize;
use tourcal_core::date_range::DateRange;
use tourcal_core::export::{plan_export, read_existing, write_event};
use tourcal_core::settings::Settings;
use tourcal_core::store::BookingStore;
use tracing::info;

use crate::commands::open_store;

pub fn run(
    settings: &Settings,
    out: Option<PathBuf>,
    range: Option<DateRange>,
    dry_run: bool,
) -> Result<()> {
    let dir = out.unwrap_or_else(|| settings.export_path());
    let tz = settings.tz()?;
    let duration = Duration::hours(i64::from(settings.tour_duration_hours));

    let mut bookings = open_store(settings).list_bookings()?;
    if let Some(range) = &range {
        bookings = range.filter(&bookings).into_iter().cloned().collect();
    }
    let existing = read_existing(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?;
    let events = plan_export(&bookings, &existing, duration);

    println!("{}", format!("📅 {}", dir.display()).bold());
    if let Some(range) = &range {
        println!(
            "{}",
            format!("   {} to {} ({} days)", range.from, range.to, range.days()).dimmed()
        );
    }

    if events.is_empty() {
        println!("{}", "   No new confirmed bookings to export".dimmed());
        return Ok(());
    }

    for event in &events {
        let when = event.start.format("%Y-%m-%d %H:%M").to_string();
        if dry_run {
            println!("   {} {} {}", "+".green(), event.summary, when.dimmed());
            continue;
        }
        let path = write_event(&dir, event, tz)?;
        println!(
            "   {} {} {}",
            "+".green(),
            event.summary.green(),
            path.file_name().unwrap_or_default().to_string_lossy().dimmed()
        );
    }

    if dry_run {
        println!("{}", format!("   {} to export (dry run)", events.len()).dimmed());
    } else {
        info!(count = events.len(), dir = %dir.display(), "exported bookings");
    }

    Ok(())
}
