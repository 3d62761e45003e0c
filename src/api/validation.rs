//! Path-parameter validation and weton query normalization.
//!
//! Every check here turns into a 400 with an Indonesian message, matching
//! what clients of the public API already rely on.

use chrono::NaiveDate;

use super::error::ApiError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `DDDD-DD-DD` with ASCII digits only.
fn is_date_layout(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a strict `YYYY-MM-DD` date, failing with `message`.
pub fn parse_date(raw: &str, message: &str) -> Result<NaiveDate, ApiError> {
    // chrono alone takes signs, padding spaces and short fields
    if !is_date_layout(raw) {
        return Err(ApiError::BadRequest(message.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ApiError::BadRequest(message.to_string()))
}

/// Parse a year and check it lies in `[min, max]`.
pub fn parse_year(raw: &str, min: i32, max: i32) -> Result<i32, ApiError> {
    let year: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("Format tahun tidak valid".to_string()))?;

    check_year(year, min, max)
}

pub fn check_year(year: i32, min: i32, max: i32) -> Result<i32, ApiError> {
    if year < min || year > max {
        return Err(ApiError::BadRequest(format!(
            "Tahun harus antara {} - {}",
            min, max
        )));
    }

    Ok(year)
}

pub fn parse_month(raw: &str) -> Result<u32, ApiError> {
    match raw.trim().parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(month),
        _ => Err(ApiError::BadRequest("Format bulan tidak valid (1-12)".to_string())),
    }
}

/// Reject `start > end` and spans longer than `max_days`.
pub fn check_span(start: NaiveDate, end: NaiveDate, max_days: i64) -> Result<(), ApiError> {
    if start > end {
        return Err(ApiError::BadRequest(
            "Tanggal start tidak boleh lebih besar dari end".to_string(),
        ));
    }

    if end.signed_duration_since(start).num_days() > max_days {
        return Err(ApiError::BadRequest(format!(
            "Range tanggal maksimal {} hari",
            max_days
        )));
    }

    Ok(())
}

/// Turn a user-typed weton into table casing.
///
/// `selasa-legi`, `SELASA%20LEGI` and `  Selasa   legi ` all become
/// `Selasa Legi`. The result is not validated here.
pub fn normalize_weton_query(raw: &str) -> String {
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());

    decoded
        .replace('-', " ")
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
