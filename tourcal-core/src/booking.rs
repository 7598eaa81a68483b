//! Booking records as delivered by the booking backend.
//!
//! The calendar treats most fields as opaque display payload. Only
//! `booking_date` and `tour_start_time` are interpreted, and both are
//! parsed leniently: a record with a bad date or time is dropped from the
//! affected buckets instead of failing the whole view.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A tour booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub tour_name: String,
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:mm:ss`
    pub booking_date: String,
    /// Wall-clock start, `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_start_time: Option<String>,
    #[serde(default)]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub channel: String,
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Booking {
    /// Calendar day of the booking, or `None` if `booking_date` is malformed.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_booking_day(&self.booking_date)
    }

    /// Hour slot of the booking, or `None` if there is no usable start time.
    pub fn start_hour(&self) -> Option<u32> {
        self.tour_start_time.as_deref().and_then(parse_start_hour)
    }

    /// Short party size label, e.g. "2A 1C".
    pub fn party_label(&self) -> String {
        if self.children > 0 {
            format!("{}A {}C", self.adults, self.children)
        } else {
            format!("{}A", self.adults)
        }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.tour_name, self.customer_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tour category, carried on the booking record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Paragliding,
    Atv,
    JeepSafari,
    Diving,
    HorseRiding,
    Boat,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Paragliding,
        Category::Atv,
        Category::JeepSafari,
        Category::Diving,
        Category::HorseRiding,
        Category::Boat,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Paragliding => "paragliding",
            Category::Atv => "atv",
            Category::JeepSafari => "jeep_safari",
            Category::Diving => "diving",
            Category::HorseRiding => "horse_riding",
            Category::Boat => "boat",
            Category::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(&s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown or null categories fall back to `Other`.
fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Category::parse).unwrap_or_default())
}

/// Extract the calendar date from a `booking_date` value.
///
/// Accepts `YYYY-MM-DD` optionally followed by a time part separated by `T`
/// or a space. Only the literal date is read; no timezone shifting happens.
pub fn parse_booking_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.split(['T', ' ']).next()?;

    // chrono accepts unpadded fields, the stored format never has them
    if date_part.len() != 10 {
        return None;
    }

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Parse the hour out of an `HH:MM` start time.
///
/// Reads the leading digits of the first `:`-separated part, so "9:15",
/// "09:15" and "09" all give 9. No leading digit, or an hour past 23, gives
/// `None`.
pub fn parse_start_hour(raw: &str) -> Option<u32> {
    let head = raw.trim().split(':').next()?;
    let digits: String = head.chars().take_while(|c| c.is_ascii_digit()).collect();
    let hour: u32 = digits.parse().ok()?;
    (hour < 24).then_some(hour)
}
