//! `DD-MMM-YY` date token handling.

use chrono::NaiveDate;

use crate::error::ParseError;

const MONTH_ABBREVS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Map a three-letter English month abbreviation to its 1-based number.
/// Case-insensitive.
pub fn month_number(abbrev: &str) -> Option<u32> {
    let upper = abbrev.to_ascii_uppercase();
    MONTH_ABBREVS
        .iter()
        .position(|m| *m == upper)
        .map(|i| i as u32 + 1)
}

/// Build a date from the captured `DD`, `MMM` and `YY` pieces.
///
/// Two-digit years always land in the 2000s; the feed has no pre-2000
/// dates. Tokens that match the shape but not the calendar (day 32,
/// month "XYZ") come back as [`ParseError::MalformedDate`].
pub fn date_from_parts(day: &str, month: &str, year: &str) -> Result<NaiveDate, ParseError> {
    let malformed = || ParseError::MalformedDate {
        token: format!("{day}-{month}-{year}"),
    };

    // Captures are \d{2}, so the numeric parses cannot fail here.
    let day: u32 = day.parse().map_err(|_| malformed())?;
    let year: i32 = year.parse::<i32>().map(|y| 2000 + y).map_err(|_| malformed())?;
    let month = month_number(month).ok_or_else(malformed)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}
