//! Stateful navigation over calendar views.

use chrono::NaiveDate;

use super::classify::today;
use super::navigate::advance;
use super::{Direction, Granularity};
use crate::booking::Booking;

/// Receives navigation and selection events.
///
/// Both methods default to no-ops; a navigator without an observer is a
/// valid configuration.
pub trait CalendarObserver {
    fn navigated(&mut self, _reference: NaiveDate, _granularity: Granularity) {}

    fn booking_selected(&mut self, _booking: &Booking) {}
}

/// Keys the navigator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Today,
}

/// Current reference date and granularity, plus an optional observer.
pub struct Navigator<'o> {
    reference: NaiveDate,
    granularity: Granularity,
    observer: Option<&'o mut dyn CalendarObserver>,
}

impl<'o> Navigator<'o> {
    pub fn new(reference: NaiveDate, granularity: Granularity) -> Self {
        Navigator {
            reference,
            granularity,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: &'o mut dyn CalendarObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn previous(&mut self) -> NaiveDate {
        self.step(Direction::Backward)
    }

    pub fn next(&mut self) -> NaiveDate {
        self.step(Direction::Forward)
    }

    /// Move `steps` units; negative goes backward.
    pub fn jump(&mut self, steps: i32) -> NaiveDate {
        let direction = if steps < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };
        for _ in 0..steps.unsigned_abs() {
            self.reference = advance(self.reference, self.granularity, direction);
        }
        if steps != 0 {
            self.notify();
        }
        self.reference
    }

    pub fn go_to(&mut self, date: NaiveDate) -> NaiveDate {
        self.reference = date;
        self.notify();
        self.reference
    }

    pub fn go_to_today(&mut self) -> NaiveDate {
        self.go_to(today())
    }

    pub fn set_granularity(&mut self, granularity: Granularity) {
        if self.granularity != granularity {
            self.granularity = granularity;
            self.notify();
        }
    }

    pub fn handle_key(&mut self, key: Key) -> NaiveDate {
        match key {
            Key::Left => self.previous(),
            Key::Right => self.next(),
            Key::Today => self.go_to_today(),
        }
    }

    pub fn select(&mut self, booking: &Booking) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.booking_selected(booking);
        }
    }

    fn step(&mut self, direction: Direction) -> NaiveDate {
        self.reference = advance(self.reference, self.granularity, direction);
        self.notify();
        self.reference
    }

    fn notify(&mut self) {
        let (reference, granularity) = (self.reference, self.granularity);
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.navigated(reference, granularity);
        }
    }
}
