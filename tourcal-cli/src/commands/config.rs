use anyhow::Result;
use owo_colors::OwoColorize;
use tourcal_core::settings::Settings;

pub fn run() -> Result<()> {
    let config_path = Settings::config_path()?;
    let settings = Settings::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Bookings:   {}", settings.bookings_path().display());
    println!("  State:      {}", settings.state_path().display());
    println!("  Export:     {}", settings.export_path().display());

    println!();
    println!("{}", "Calendar".bold());
    let hours = settings.hour_range();
    println!("  Day view:   {:02}:00-{:02}:00", hours.first(), hours.last());
    println!("  Tours:      {}h", settings.tour_duration_hours);
    println!("  Timezone:   {}", settings.timezone);

    Ok(())
}
