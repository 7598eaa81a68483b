use anyhow::Result;
use owo_colors::OwoColorize;
use tourcal_core::calendar::today;
use tourcal_core::settings::Settings;
use tourcal_core::stats::BookingStats;
use tourcal_core::store::BookingStore;

use crate::commands::{open_state, open_store};
use crate::render::Render;

pub fn run(settings: &Settings, json: bool) -> Result<()> {
    let bookings = open_store(settings).list_bookings()?;
    let language = open_state(settings)?.language();

    let today = today();
    let stats = BookingStats::compute(&bookings, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", language.month_title(today).bold());
    println!("{}", stats.render());

    Ok(())
}
