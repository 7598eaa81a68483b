pub mod add;
pub mod config;
pub mod export;
pub mod lang;
pub mod login;
pub mod logout;
pub mod session;
pub mod stats;
pub mod status;
pub mod view;

use anyhow::Result;
use tourcal_core::settings::Settings;
use tourcal_core::state::{AppState, FileStore};
use tourcal_core::store::JsonBookingStore;

/// Session state backed by the configured state file.
pub fn open_state(settings: &Settings) -> Result<AppState<FileStore>> {
    let store = FileStore::open_or_reset(&settings.state_path())?;
    Ok(AppState::load(store))
}

pub fn open_store(settings: &Settings) -> JsonBookingStore {
    JsonBookingStore::new(&settings.bookings_path())
}
