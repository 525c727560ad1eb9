//! Compiled patterns for the known purchase-order reference layouts.
//!
//! The layouts are not mutually exclusive at the regex level (a
//! quoted-keyword line also contains digit runs); the priority order in
//! [`FormatParser`](super::FormatParser) is what disambiguates them.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Token separators are horizontal whitespace only: a pair never
    // spans lines, otherwise the control date's trailing year would
    // pair up with the first number on the next line.

    // "123 45 01-JAN-24" — PO number, line number, inline date
    pub static ref PER_ROW_DATE: Regex = Regex::new(
        r"\b(\d+)[ \t]+(\d+)[ \t]+(\d{2})-([A-Za-z]{3})-(\d{2})\b"
    ).unwrap();

    // Global control date line
    pub static ref CONTROL_DATE: Regex = Regex::new(
        r"(?i)controlled\s+date:\s*(\d{2})-([A-Za-z]{3})-(\d{2})"
    ).unwrap();

    // "po_number='440468137' and po_line_number=11"
    pub static ref QUOTED_KEYWORD: Regex = Regex::new(
        r"(?i)po_number='(\d+)'\s+and\s+po_line_number=(\d+)"
    ).unwrap();

    // Two whitespace-separated integer tokens, anywhere
    pub static ref BARE_PAIR: Regex = Regex::new(
        r"\b(\d+)[ \t]+(\d+)\b"
    ).unwrap();

    // "PO 440468137 line 11"
    pub static ref KEYWORD_LINE: Regex = Regex::new(
        r"(?i)\bpo[ \t]+(\d+)[ \t]+line[ \t]+(\d+)\b"
    ).unwrap();
}
