//! Parser for post dates written as `Apr 20, 2022`
//!
//! Format:
//! ```text
//! <Mon> <D>, <YYYY>
//! ```
//! where `Mon` is a capitalized three-letter English month abbreviation and
//! `D` is the day of month without zero padding (a padded `05` is accepted
//! too). Unknown months and impossible days are rejected rather than
//! rolled over into a neighbouring month.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parser for the `Mon D, YYYY` date format
pub struct DateParser {
    regex: Regex,
}

impl DateParser {
    /// Create a new date parser
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"^([A-Za-z]{3}) (\d{1,2}), (\d{4})$")?;
        Ok(Self { regex })
    }

    /// Parse a date string such as `Apr 20, 2022`
    pub fn parse(&self, input: &str) -> Result<NaiveDate> {
        let invalid = || Error::InvalidDate(input.to_string());

        let captures = self.regex.captures(input.trim()).ok_or_else(invalid)?;

        let month = month_from_abbreviation(&captures[1]).ok_or_else(invalid)?;
        let day: u32 = captures[2].parse().map_err(|_| invalid())?;
        let year: i32 = captures[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
    }
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new().expect("Failed to create date parser - regex compilation failed")
    }
}

/// 1-based month number for a three-letter abbreviation
fn month_from_abbreviation(abbreviation: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == abbreviation)
        .map(|idx| idx as u32 + 1)
}

/// Parse a date string such as `Apr 20, 2022`
///
/// Builds a fresh [`DateParser`] (and its regex) on every call. When parsing
/// many dates, create one parser and reuse it.
pub fn parse_month_day_year(input: &str) -> Result<NaiveDate> {
    let parser = DateParser::new()?;
    parser.parse(input)
}

/// Render a date back into the `Mon D, YYYY` format
pub fn format_month_day_year(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        MONTHS[date.month0() as usize],
        date.day(),
        date.year()
    )
}
