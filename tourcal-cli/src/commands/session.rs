use anyhow::Result;
use owo_colors::OwoColorize;
use tourcal_core::settings::Settings;

use crate::commands::open_state;

pub fn run(settings: &Settings) -> Result<()> {
    let mut state = open_state(settings)?;
    let chat_session = state.chat_session()?;

    println!("{}", "Session".bold());
    println!("  Language:   {}", state.language());
    println!(
        "  Admin:      {}",
        if state.is_admin() { "yes" } else { "no" }
    );
    println!("  Chat:       {}", chat_session.dimmed());

    Ok(())
}
