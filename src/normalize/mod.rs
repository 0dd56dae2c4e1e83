//! Field Normalization
//!
//! Converts raw statement tokens (Indian-format amounts, short dates,
//! reference-laden descriptions) into typed values.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d{2}$").unwrap());
static REFERENCE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{8,}").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Parse an Indian-format amount (1,23,456.78 -> 123456.78)
///
/// Comma positions are not validated; statements mix lakh and western
/// grouping freely. The cleaned token must still be digits with exactly
/// two decimal places.
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned = s.trim().replace(',', "");
    if !AMOUNT_SHAPE.is_match(&cleaned) {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a statement date (DD/MM/YY, DD/MM/YYYY, or dash-separated)
///
/// Two-digit years land in 2000-2099, matching how the banks print them.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let normalized = s.trim().replace('-', "/");
    let parts: Vec<&str> = normalized.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = match parts[2].len() {
        2 => 2000 + parts[2].parse::<i32>().ok()?,
        4 => parts[2].parse().ok()?,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Clean a raw description for output
///
/// Strips bare reference runs (8+ digits) and collapses whitespace. A
/// cleaned result shorter than 3 characters falls back to the raw text,
/// and an empty raw text to a placeholder naming the bank.
pub fn clean_description(raw: &str, bank_name: &str) -> String {
    let stripped = REFERENCE_RUN.replace_all(raw, "");
    let collapsed = WHITESPACE_RUN.replace_all(stripped.trim(), " ").to_string();
    if collapsed.len() >= 3 {
        return collapsed;
    }

    let fallback = WHITESPACE_RUN.replace_all(raw.trim(), " ").to_string();
    if fallback.is_empty() {
        format!("{} Transaction", bank_name)
    } else {
        fallback
    }
}
