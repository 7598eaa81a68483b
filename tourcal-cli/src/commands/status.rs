use anyhow::Result;
use owo_colors::OwoColorize;
use tourcal_core::BookingStatus;
use tourcal_core::settings::Settings;
use tourcal_core::store::BookingStore;

use crate::commands::open_store;
use crate::render::Render;

pub fn run(settings: &Settings, id: &str, status: &str) -> Result<()> {
    let Some(status) = BookingStatus::parse(status) else {
        let available: Vec<_> = BookingStatus::ALL.iter().map(|s| s.as_str()).collect();
        anyhow::bail!(
            "Unknown status '{}'. Available: {}",
            status,
            available.join(", ")
        );
    };

    let booking = open_store(settings).update_booking_status(id, status)?;

    println!(
        "{} {}",
        format!("  Updated: {booking}").green(),
        booking.status.render()
    );

    Ok(())
}
