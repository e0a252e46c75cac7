//! Date canonicalization for header transforms.
//!
//! Every function here returns `None` instead of failing so that a header
//! value that is not a date simply becomes an incomplete key.

use std::sync::LazyLock;

use chrono::NaiveDate;
use gridkey_model::CellValue;
use regex::Regex;

/// Canonical date form used as a record key.
pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// `month/day/year` as typed into a sheet cell.
static SLASH_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)/(\d+)/(\d+)$").expect("Invalid slash date regex")
});

static MONTH_SHEET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Daily Sales - (?<month>\w{3} \d{4})").expect("Invalid sheet name regex")
});

/// Canonical `YYYY-MM-DD` form of a date cell or a `m/d/y` string.
pub fn extract_date(value: &CellValue) -> Option<String> {
    match value {
        CellValue::Date(_) | CellValue::DateTime(_) => value
            .as_date()
            .map(|date| date.format(CANONICAL_DATE_FORMAT).to_string()),
        CellValue::Text(text) => parse_slash_date(text.trim())
            .map(|date| date.format(CANONICAL_DATE_FORMAT).to_string()),
        _ => None,
    }
}

/// Header transform wrapper around [`extract_date`]: non-dates become `Empty`.
pub fn date_key(value: &CellValue) -> CellValue {
    extract_date(value).map_or(CellValue::Empty, CellValue::Text)
}

/// Parses `m/d/y`. Two-digit years map 00-49 to 20xx and 50-99 to 19xx.
pub fn parse_slash_date(text: &str) -> Option<NaiveDate> {
    let captures = SLASH_DATE_REGEX.captures(text)?;
    let month: u32 = captures[1].parse().ok()?;
    let day: u32 = captures[2].parse().ok()?;
    let mut year: i32 = captures[3].parse().ok()?;
    if captures[3].len() <= 2 {
        year += if year < 50 { 2000 } else { 1900 };
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First day of the month named by a `Daily Sales - Mon YYYY` sheet.
pub fn parse_month_sheet_name(sheet_name: &str) -> Option<NaiveDate> {
    let captures = MONTH_SHEET_REGEX.captures(sheet_name)?;
    let month = captures.name("month")?.as_str();
    NaiveDate::parse_from_str(&format!("01 {month}"), "%d %b %Y").ok()
}
