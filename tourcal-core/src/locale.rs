//! Display language and the calendar labels that depend on it.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];
const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKDAYS_TR: [&str; 7] = ["Pzt", "Sal", "Çar", "Per", "Cum", "Cmt", "Paz"];

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "tr" => Some(Language::Tr),
            _ => None,
        }
    }

    /// Month name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> &'static str {
        let names = match self {
            Language::En => &MONTHS_EN,
            Language::Tr => &MONTHS_TR,
        };
        names[(month.clamp(1, 12) - 1) as usize]
    }

    /// Short weekday names, Monday first.
    pub fn weekday_names(&self) -> [&'static str; 7] {
        match self {
            Language::En => WEEKDAYS_EN,
            Language::Tr => WEEKDAYS_TR,
        }
    }

    pub fn weekday_name(&self, date: NaiveDate) -> &'static str {
        self.weekday_names()[date.weekday().num_days_from_monday() as usize]
    }

    /// "June 2025"
    pub fn month_title(&self, date: NaiveDate) -> String {
        format!("{} {}", self.month_name(date.month()), date.year())
    }

    /// "Sun 1 June 2025"
    pub fn day_title(&self, date: NaiveDate) -> String {
        format!(
            "{} {} {} {}",
            self.weekday_name(date),
            date.day(),
            self.month_name(date.month()),
            date.year()
        )
    }

    pub fn today_label(&self) -> &'static str {
        match self {
            Language::En => "Today",
            Language::Tr => "Bugün",
        }
    }

    /// "+2 more"
    pub fn more_label(&self, count: usize) -> String {
        match self {
            Language::En => format!("+{count} more"),
            Language::Tr => format!("+{count} daha"),
        }
    }

    pub fn no_bookings_label(&self) -> &'static str {
        match self {
            Language::En => "No bookings",
            Language::Tr => "Rezervasyon yok",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(Language::En.month_title(date), "June 2025");
        assert_eq!(Language::Tr.month_title(date), "Haziran 2025");
        assert_eq!(Language::En.day_title(date), "Sun 1 June 2025");
        assert_eq!(Language::Tr.weekday_name(date), "Paz");
    }

    #[test]
    fn parse_codes() {
        assert_eq!(Language::parse("TR"), Some(Language::Tr));
        assert_eq!(Language::parse("de"), None);
    }
}
