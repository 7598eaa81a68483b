use anyhow::Result;
use dialoguer::Password;
use owo_colors::OwoColorize;
use tourcal_core::settings::Settings;

use crate::commands::open_state;

pub fn run(settings: &Settings) -> Result<()> {
    let mut state = open_state(settings)?;

    if state.is_admin() {
        println!("{}", "  Already logged in".dimmed());
        return Ok(());
    }

    let attempt = Password::new().with_prompt("  Password").interact()?;

    if !state.log_in(&attempt, &settings.admin_password)? {
        anyhow::bail!("Incorrect password");
    }

    println!("{}", "  Logged in as admin".green());

    Ok(())
}
