//! TUI rendering for tourcal types.
//!
//! Extension traits and grid layouts that turn calendar views into colored
//! terminal output using owo_colors.

use owo_colors::OwoColorize;
use tourcal_core::calendar::{CalendarView, DayBucket, Granularity};
use tourcal_core::stats::BookingStats;
use tourcal_core::{Booking, BookingStatus, Category, Color, Language};

/// Width of one month grid cell, in characters.
const CELL_WIDTH: usize = 16;

/// Bookings listed per month cell before collapsing into "+N more".
const MAX_CELL_BOOKINGS: usize = 2;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

fn paint(text: &str, color: Color) -> String {
    let (r, g, b) = color.rgb();
    text.truecolor(r, g, b).to_string()
}

impl Render for BookingStatus {
    fn render(&self) -> String {
        paint(self.as_str(), self.color())
    }
}

impl Render for Category {
    fn render(&self) -> String {
        paint("●", self.color())
    }
}

impl Render for Booking {
    fn render(&self) -> String {
        let time = self.tour_start_time.as_deref().unwrap_or("--:--");
        format!(
            "{} {} {} {} {} {}",
            time.dimmed(),
            self.category.render(),
            self,
            self.party_label().dimmed(),
            self.status.render(),
            format!("#{}", short_id(&self.id)).dimmed()
        )
    }
}

impl Render for BookingStats {
    fn render(&self) -> String {
        [
            format!("  This month:  {}", self.this_month.bold()),
            format!("  This week:   {}", self.this_week.bold()),
            format!("  Today:       {}", self.today.bold()),
            format!("  Occupancy:   {}", format!("{}%", self.occupancy).bold()),
        ]
        .join("\n")
    }
}

/// Render a projected view in the given language.
pub fn render_view(view: &CalendarView, lang: Language) -> String {
    match view.granularity {
        Granularity::Month => render_month(view, lang),
        Granularity::Week => render_week(view, lang),
        Granularity::Day => render_day(view, lang),
    }
}

fn render_month(view: &CalendarView, lang: Language) -> String {
    let mut lines = vec![lang.month_title(view.reference).bold().to_string(), String::new()];

    lines.push(
        lang.weekday_names()
            .iter()
            .map(|name| fit(name, CELL_WIDTH).dimmed().to_string())
            .collect::<String>(),
    );

    for week in view.days().chunks(7) {
        let mut rows = vec![String::new(); MAX_CELL_BOOKINGS + 2];
        for day in week {
            for (row, cell) in rows.iter_mut().zip(month_cell(day, lang)) {
                row.push_str(&cell);
            }
        }
        lines.extend(rows);
    }

    lines.join("\n")
}

/// The lines of one month cell, each padded to `CELL_WIDTH`.
fn month_cell(day: &DayBucket, lang: Language) -> Vec<String> {
    let number = fit(&day.date.format("%-d").to_string(), CELL_WIDTH);
    let mut cell = vec![if day.is_today {
        number.reversed().bold().to_string()
    } else if !day.in_month {
        number.dimmed().to_string()
    } else {
        number
    }];

    for booking in day.bookings.iter().take(MAX_CELL_BOOKINGS) {
        let label = fit(&booking.customer_name, CELL_WIDTH - 2);
        cell.push(format!("{} {}", booking.category.render(), paint(&label, booking.status.color())));
    }

    let hidden = day.bookings.len().saturating_sub(MAX_CELL_BOOKINGS);
    if hidden > 0 {
        cell.push(fit(&lang.more_label(hidden), CELL_WIDTH).dimmed().to_string());
    }

    cell.resize(MAX_CELL_BOOKINGS + 2, " ".repeat(CELL_WIDTH));
    cell
}

fn render_week(view: &CalendarView, lang: Language) -> String {
    let range = view.range();
    let mut lines = vec![
        format!(
            "{} – {}",
            lang.day_title(range.from),
            lang.day_title(range.to)
        )
        .bold()
        .to_string(),
    ];

    for day in view.days() {
        lines.push(String::new());
        lines.push(day_header(day, lang));
        if day.bookings.is_empty() {
            lines.push(format!("  {}", lang.no_bookings_label().dimmed()));
        }
        for booking in &day.bookings {
            lines.push(format!("  {}", booking.render()));
        }
    }

    lines.join("\n")
}

fn render_day(view: &CalendarView, lang: Language) -> String {
    let mut lines = vec![lang.day_title(view.reference).bold().to_string(), String::new()];

    for slot in view.slots() {
        if slot.bookings.is_empty() {
            lines.push(slot.label().dimmed().to_string());
            continue;
        }
        lines.push(slot.label().bold().to_string());
        for booking in &slot.bookings {
            lines.push(format!("  {}", booking.render()));
        }
    }

    let unscheduled = view.unscheduled();
    if !unscheduled.is_empty() {
        lines.push(String::new());
        lines.push("--:--".dimmed().to_string());
        for booking in unscheduled {
            lines.push(format!("  {}", booking.render()));
        }
    }

    lines.join("\n")
}

fn day_header(day: &DayBucket, lang: Language) -> String {
    let title = format!("{} {}", lang.weekday_name(day.date), day.date.format("%-d"));
    if day.is_today {
        format!("{} {}", title.bold(), format!("({})", lang.today_label()).green())
    } else if day.is_past {
        title.dimmed().to_string()
    } else {
        title.bold().to_string()
    }
}

/// Truncate or pad `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("Şubat", 5), "Şubat");
    }

    #[test]
    fn short_ids() {
        assert_eq!(short_id("7f3c2a10-aaaa-bbbb"), "7f3c2a10");
        assert_eq!(short_id("b-1"), "b-1");
    }
}
