use anyhow::Result;
use owo_colors::OwoColorize;
use tourcal_core::Language;
use tourcal_core::settings::Settings;

use crate::commands::open_state;

pub fn run(settings: &Settings, language: Option<&str>) -> Result<()> {
    let mut state = open_state(settings)?;

    let Some(code) = language else {
        println!("{}", state.language());
        return Ok(());
    };

    let Some(language) = Language::parse(code) else {
        anyhow::bail!("Unknown language '{}'. Available: en, tr", code);
    };

    state.set_language(language)?;
    println!("{}", format!("  Language set to {language}").green());

    Ok(())
}
