use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use tourcal_core::Category;
use tourcal_core::settings::Settings;
use tourcal_core::store::{BookingStore, NewBooking};

use crate::commands::open_store;
use crate::utils::dates::{parse_date_input, parse_time_input};

/// Booking fields given on the command line.
pub struct AddArgs {
    pub customer: Option<String>,
    pub tour: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub adults: Option<u32>,
    pub children: Option<u32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub channel: String,
}

pub fn run(settings: &Settings, args: AddArgs) -> Result<()> {
    let interactive = args.customer.is_none() || args.tour.is_none() || args.date.is_none();

    // --- Customer ---
    let customer_name = match args.customer {
        Some(c) => c,
        None => Input::<String>::new()
            .with_prompt("  Customer")
            .interact_text()?,
    };

    // --- Tour ---
    let tour_name = match args.tour {
        Some(t) => t,
        None => Input::<String>::new().with_prompt("  Tour").interact_text()?,
    };

    let category = match args.category {
        Some(c) => Category::parse(&c).ok_or_else(|| unknown_category(&c))?,
        None if interactive => prompt_category()?,
        None => Category::Other,
    };

    // --- Date / time ---
    let date = match args.date {
        Some(d) => parse_date_input(&d)?,
        None => prompt_with_retry("  When?", parse_date_input)?,
    };

    let tour_start_time = match args.time {
        Some(t) => Some(parse_time_input(&t)?),
        None if interactive => prompt_optional("  Start time (HH:MM, skip)", parse_time_input)?,
        None => None,
    };

    // --- Party ---
    let adults = match args.adults {
        Some(n) => n,
        None if interactive => Input::new().with_prompt("  Adults").default(1).interact_text()?,
        None => 1,
    };
    let children = match args.children {
        Some(n) => n,
        None if interactive => Input::new()
            .with_prompt("  Children")
            .default(0)
            .interact_text()?,
        None => 0,
    };

    // --- Contact ---
    let customer_email = match args.email {
        Some(e) => non_empty(e),
        None if interactive => prompt_optional("  Email (skip)", |s| Ok(s.to_string()))?,
        None => None,
    };
    let customer_phone = match args.phone {
        Some(p) => non_empty(p),
        None if interactive => prompt_optional("  Phone (skip)", |s| Ok(s.to_string()))?,
        None => None,
    };

    let booking = open_store(settings).create_booking(NewBooking {
        customer_name,
        customer_email,
        customer_phone,
        tour_name,
        category,
        booking_date: format_date(date),
        tour_start_time,
        adults,
        children,
        channel: args.channel,
        total_amount: None,
    })?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!("  Created: {} on {} ({})", booking, booking.booking_date, booking.id).green()
    );

    Ok(())
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

fn unknown_category(input: &str) -> anyhow::Error {
    let available: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
    anyhow::anyhow!(
        "Unknown category '{}'. Available: {}",
        input,
        available.join(", ")
    )
}

fn prompt_category() -> Result<Category> {
    let items: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(items.len() - 1)
        .interact()?;
    Ok(Category::ALL[selection])
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Like `prompt_with_retry`, but an empty answer means "none".
fn prompt_optional<T, F>(prompt: &str, parse: F) -> Result<Option<T>>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match parse(&input) {
            Ok(result) => return Ok(Some(result)),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_contact_fields_are_dropped() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("a@b.c".to_string()).as_deref(), Some("a@b.c"));
    }

    #[test]
    fn dates_are_stored_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(format_date(date), "2025-06-01");
    }

    #[test]
    fn unknown_category_lists_choices() {
        let message = unknown_category("yoga").to_string();
        assert!(message.contains("'yoga'"));
        assert!(message.contains("jeep_safari"));
    }
}
