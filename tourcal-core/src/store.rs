//! Booking store contract and a JSON-file implementation.
//!
//! The calendar never talks to a store directly; callers fetch the full
//! booking list and hand it to the projector.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{info, warn};

use crate::booking::{Booking, BookingStatus, Category};
use crate::error::{TourCalError, TourCalResult};

/// Fields supplied when creating a booking. The store assigns the rest.
#[derive(Debug, Clone, Default)]
pub struct NewBooking {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub tour_name: String,
    pub category: Category,
    pub booking_date: String,
    pub tour_start_time: Option<String>,
    pub adults: u32,
    pub children: u32,
    pub channel: String,
    pub total_amount: Option<f64>,
}

/// Where bookings live.
pub trait BookingStore {
    fn list_bookings(&self) -> TourCalResult<Vec<Booking>>;

    fn create_booking(&mut self, booking: NewBooking) -> TourCalResult<Booking>;

    fn update_booking_status(&mut self, id: &str, status: BookingStatus) -> TourCalResult<Booking>;
}

/// Bookings kept as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonBookingStore {
    path: PathBuf,
}

impl JsonBookingStore {
    pub fn new(path: &Path) -> Self {
        JsonBookingStore {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> TourCalResult<Vec<Booking>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<serde_json::Value> = serde_json::from_str(&content).map_err(|e| {
            TourCalError::Store(format!("Could not parse {}: {e}", self.path.display()))
        })?;

        // One malformed record drops only itself
        let bookings = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Booking>(record) {
                Ok(booking) => Some(booking),
                Err(e) => {
                    warn!(path = %self.path.display(), index, error = %e, "skipping unreadable booking");
                    None
                }
            })
            .collect();

        Ok(bookings)
    }

    fn write(&self, bookings: &[Booking]) -> TourCalResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(bookings)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl BookingStore for JsonBookingStore {
    fn list_bookings(&self) -> TourCalResult<Vec<Booking>> {
        self.read()
    }

    fn create_booking(&mut self, new: NewBooking) -> TourCalResult<Booking> {
        let mut bookings = self.read()?;

        let booking = Booking {
            id: uuid::Uuid::new_v4().to_string(),
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            customer_phone: new.customer_phone,
            tour_name: new.tour_name,
            booking_date: new.booking_date,
            tour_start_time: new.tour_start_time,
            adults: new.adults,
            children: new.children,
            channel: new.channel,
            status: BookingStatus::Pending,
            category: new.category,
            total_amount: new.total_amount,
            created_at: Some(Utc::now().to_rfc3339()),
        };

        bookings.push(booking.clone());
        self.write(&bookings)?;

        info!(booking.id = %booking.id, booking.date = %booking.booking_date, "created booking");
        Ok(booking)
    }

    fn update_booking_status(&mut self, id: &str, status: BookingStatus) -> TourCalResult<Booking> {
        let mut bookings = self.read()?;

        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| TourCalError::BookingNotFound(id.to_string()))?;
        booking.status = status;
        let updated = booking.clone();

        self.write(&bookings)?;

        info!(booking.id = %id, status = %status, "updated booking status");
        Ok(updated)
    }
}
