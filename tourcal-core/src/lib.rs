//! Core types for the tourcal booking calendar.
//!
//! This crate turns a flat list of tour bookings into calendar views:
//! - `calendar` projects bookings into month, week and day grids and handles navigation
//! - `stats` summarizes bookings relative to today
//! - `export` writes confirmed bookings out as `.ics` events
//! - `store`, `state` and `settings` cover where bookings, session state and configuration live

pub mod booking;
pub mod calendar;
pub mod date_range;
pub mod error;
pub mod export;
pub mod locale;
pub mod palette;
pub mod settings;
pub mod state;
pub mod stats;
pub mod store;

#[cfg(test)]
mod testing;

pub use booking::{Booking, BookingStatus, Category};
pub use calendar::{CalendarProjector, CalendarView, Direction, Granularity, Navigator};
pub use error::{TourCalError, TourCalResult};
pub use locale::Language;
pub use palette::Color;
pub use settings::Settings;
