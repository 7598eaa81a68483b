use anyhow::Result;
use owo_colors::OwoColorize;
use tourcal_core::settings::Settings;

use crate::commands::open_state;

pub fn run(settings: &Settings) -> Result<()> {
    let mut state = open_state(settings)?;
    state.reset()?;

    println!("{}", "  Logged out, session cleared".green());

    Ok(())
}
