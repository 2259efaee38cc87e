//! Display formatting for grid cells and metric cards.
//!
//! These are pure string projections. Anything that does not parse is
//! passed through unchanged so a malformed cell never breaks a render.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Format an ISO `YYYY-MM-DD` date as `DD-MM-YYYY`.
///
/// An empty input renders as an empty string; an unparseable input is
/// passed through as-is.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    // Backend dates are plain `%Y-%m-%d`; tolerate a datetime suffix.
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%d-%m-%Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// Format a number with exactly two decimal digits and `en` thousands
/// grouping, e.g. `-1234567.891` -> `-1,234,567.89`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = format!("{:.2}", value.abs());
    let (int_part, frac_part) = magnitude.split_once('.').unwrap_or((magnitude.as_str(), "00"));
    let grouped = int_part
        .parse::<u64>()
        .map_or_else(|_| int_part.to_owned(), |n| n.to_formatted_string(&Locale::en));
    // Keep the sign unless the value rounds to 0.00.
    let sign = if value.is_sign_negative() && magnitude != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
