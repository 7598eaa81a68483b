//! Calendar projection: turns a flat list of bookings into month, week or
//! day grids.
//!
//! Everything in here is pure. A view is recomputed from
//! `(reference, granularity, bookings)` whenever any of them changes.

mod bucket;
mod classify;
mod grid;
mod navigate;
mod navigator;
mod view;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use bucket::{bookings_for_date, bookings_for_hour, partition_by_day};
pub use classify::{is_in_month, is_past, is_past_at, is_today, is_today_at, today};
pub use grid::{HourRange, MONTH_GRID_LEN, build_day_grid, build_month_grid, build_week_grid};
pub use navigate::advance;
pub use navigator::{CalendarObserver, Key, Navigator};
pub use view::{Buckets, CalendarProjector, CalendarView, DayBucket, HourBucket};

/// Display resolution of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Month,
    Week,
    Day,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Month => f.write_str("month"),
            Granularity::Week => f.write_str("week"),
            Granularity::Day => f.write_str("day"),
        }
    }
}

/// Navigation direction, one grid unit at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// -1 or +1
    pub fn sign(&self) -> i32 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}
