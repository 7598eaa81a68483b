//! Fixtures shared by unit tests.

use crate::booking::{Booking, BookingStatus, Category};

/// A confirmed two-adult jeep safari booking.
pub fn booking(id: &str, date: &str, time: Option<&str>) -> Booking {
    Booking {
        id: id.to_string(),
        customer_name: format!("Customer {id}"),
        customer_email: None,
        customer_phone: None,
        tour_name: "Jeep Safari".to_string(),
        booking_date: date.to_string(),
        tour_start_time: time.map(str::to_string),
        adults: 2,
        children: 0,
        channel: "website".to_string(),
        status: BookingStatus::Confirmed,
        category: Category::JeepSafari,
        total_amount: None,
        created_at: None,
    }
}

pub fn with_status(mut booking: Booking, status: BookingStatus) -> Booking {
    booking.status = status;
    booking
}
