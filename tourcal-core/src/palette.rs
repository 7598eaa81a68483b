//! Display colors for categories and booking statuses.

use crate::booking::{BookingStatus, Category};

/// Named display color with its RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Amber,
    Red,
    Gray,
}

impl Color {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Blue => (0x3b, 0x82, 0xf6),
            Color::Green => (0x22, 0xc5, 0x5e),
            Color::Yellow => (0xea, 0xb3, 0x08),
            Color::Orange => (0xf9, 0x73, 0x16),
            Color::Purple => (0xa8, 0x55, 0xf7),
            Color::Amber => (0xb4, 0x53, 0x09),
            Color::Red => (0xef, 0x44, 0x44),
            Color::Gray => (0x6b, 0x72, 0x80),
        }
    }
}

impl Category {
    pub fn color(&self) -> Color {
        match self {
            Category::Paragliding => Color::Blue,
            Category::Atv => Color::Green,
            Category::JeepSafari => Color::Yellow,
            Category::Diving => Color::Orange,
            Category::HorseRiding => Color::Purple,
            Category::Boat => Color::Amber,
            Category::Other => Color::Gray,
        }
    }
}

impl BookingStatus {
    pub fn color(&self) -> Color {
        match self {
            BookingStatus::Pending => Color::Yellow,
            BookingStatus::Confirmed => Color::Green,
            BookingStatus::Completed => Color::Blue,
            BookingStatus::Cancelled => Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_a_distinct_color() {
        let colors: HashSet<Color> = Category::ALL.iter().map(Category::color).collect();
        assert_eq!(colors.len(), Category::ALL.len());
    }

    #[test]
    fn status_colors() {
        assert_eq!(BookingStatus::Pending.color(), Color::Yellow);
        assert_eq!(BookingStatus::Cancelled.color(), Color::Red);
    }
}
