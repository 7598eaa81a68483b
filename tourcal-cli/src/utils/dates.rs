use anyhow::Result;
use chrono::NaiveDate;

/// Parse a date given on the command line.
///
/// Accepts `YYYY-MM-DD` as-is, otherwise falls back to natural language
/// ("tomorrow", "next friday", "jun 3").
pub fn parse_date_input(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// Normalize a start time to `HH:MM`.
pub fn parse_time_input(input: &str) -> Result<String> {
    let input = input.trim();
    let (hour, minute) = match input.split_once(':') {
        Some((h, m)) => (h, m),
        None => (input, "0"),
    };

    let hour: u32 = hour
        .parse()
        .map_err(|_| anyhow::anyhow!("Could not parse time: \"{}\"", input))?;
    let minute: u32 = minute
        .parse()
        .map_err(|_| anyhow::anyhow!("Could not parse time: \"{}\"", input))?;

    if hour > 23 || minute > 59 {
        anyhow::bail!("Time out of range: \"{}\"", input);
    }

    Ok(format!("{hour:02}:{minute:02}"))
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| full.to_string())
                .unwrap_or_else(|| word.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
