//! Projected calendar views.

use chrono::NaiveDate;

use super::bucket::partition_by_day;
use super::classify::{is_in_month, is_past_at, is_today_at, today};
use super::grid::{HourRange, build_day_grid, build_month_grid, build_week_grid};
use super::Granularity;
use crate::booking::Booking;
use crate::date_range::DateRange;

/// One day cell.
#[derive(Debug, Clone)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    /// False for the leading and trailing days of a month grid
    pub in_month: bool,
    pub is_today: bool,
    pub is_past: bool,
    pub bookings: Vec<&'a Booking>,
}

/// One hour slot of the day view.
#[derive(Debug, Clone)]
pub struct HourBucket<'a> {
    pub hour: u32,
    pub bookings: Vec<&'a Booking>,
}

impl HourBucket<'_> {
    /// "08:00"
    pub fn label(&self) -> String {
        format!("{:02}:00", self.hour)
    }
}

#[derive(Debug, Clone)]
pub enum Buckets<'a> {
    /// Month (42 cells) or week (7 cells)
    Days(Vec<DayBucket<'a>>),
    /// Day view: the whole day plus its hour slots
    Hours {
        day: DayBucket<'a>,
        slots: Vec<HourBucket<'a>>,
    },
}

/// A display-ready grid. Recomputed from scratch on every change.
#[derive(Debug, Clone)]
pub struct CalendarView<'a> {
    pub reference: NaiveDate,
    pub granularity: Granularity,
    pub buckets: Buckets<'a>,
}

impl<'a> CalendarView<'a> {
    /// Day cells of a month or week view, or the single day of a day view.
    pub fn days(&self) -> &[DayBucket<'a>] {
        match &self.buckets {
            Buckets::Days(days) => days,
            Buckets::Hours { day, .. } => std::slice::from_ref(day),
        }
    }

    /// Hour slots; empty unless this is a day view.
    pub fn slots(&self) -> &[HourBucket<'a>] {
        match &self.buckets {
            Buckets::Days(_) => &[],
            Buckets::Hours { slots, .. } => slots,
        }
    }

    /// First and last displayed dates.
    pub fn range(&self) -> DateRange {
        let days = self.days();
        match (days.first(), days.last()) {
            (Some(first), Some(last)) => DateRange::new(first.date, last.date),
            _ => DateRange::new(self.reference, self.reference),
        }
    }

    /// Bookings on the day view that have no hour slot.
    pub fn unscheduled(&self) -> Vec<&'a Booking> {
        match &self.buckets {
            Buckets::Days(_) => Vec::new(),
            Buckets::Hours { day, slots } => day
                .bookings
                .iter()
                .copied()
                .filter(|b| !slots.iter().any(|s| Some(s.hour) == b.start_hour()))
                .collect(),
        }
    }

    /// Total bookings shown in this view.
    pub fn booking_count(&self) -> usize {
        self.days().iter().map(|d| d.bookings.len()).sum()
    }
}

/// Builds calendar views for a fixed hour range and "today".
#[derive(Debug, Clone, Copy)]
pub struct CalendarProjector {
    hours: HourRange,
    today: NaiveDate,
}

impl Default for CalendarProjector {
    fn default() -> Self {
        CalendarProjector::new(HourRange::default())
    }
}

impl CalendarProjector {
    /// Projector anchored on the current local date.
    pub fn new(hours: HourRange) -> Self {
        CalendarProjector {
            hours,
            today: today(),
        }
    }

    /// Projector with a fixed notion of today.
    pub fn at(hours: HourRange, today: NaiveDate) -> Self {
        CalendarProjector { hours, today }
    }

    pub fn hours(&self) -> HourRange {
        self.hours
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn project<'a>(
        &self,
        reference: NaiveDate,
        granularity: Granularity,
        bookings: &'a [Booking],
    ) -> CalendarView<'a> {
        let by_day = partition_by_day(bookings);

        let day_bucket = |date: NaiveDate| DayBucket {
            date,
            in_month: is_in_month(date, reference),
            is_today: is_today_at(date, self.today),
            is_past: is_past_at(date, self.today),
            bookings: by_day.get(&date).cloned().unwrap_or_default(),
        };

        let buckets = match granularity {
            Granularity::Month => {
                Buckets::Days(build_month_grid(reference).into_iter().map(day_bucket).collect())
            }
            Granularity::Week => {
                Buckets::Days(build_week_grid(reference).into_iter().map(day_bucket).collect())
            }
            Granularity::Day => {
                let day = day_bucket(reference);
                let slots = build_day_grid(self.hours)
                    .into_iter()
                    .map(|hour| HourBucket {
                        hour,
                        bookings: day
                            .bookings
                            .iter()
                            .filter(|b| b.start_hour() == Some(hour))
                            .copied()
                            .collect(),
                    })
                    .collect();
                Buckets::Hours { day, slots }
            }
        };

        CalendarView {
            reference,
            granularity,
            buckets,
        }
    }
}
