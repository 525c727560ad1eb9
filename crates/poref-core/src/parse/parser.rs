//! Ordered-fallback dispatcher over the layout extractors.

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::models::record::PoRecord;

use super::date::date_from_parts;
use super::extractors::{
    BarePairExtractor, KeywordLineExtractor, PerRowDateExtractor, QuotedKeywordExtractor,
    RecordExtractor,
};
use super::patterns::CONTROL_DATE;

/// Multi-layout parser for purchase-order reference text.
///
/// Layouts are tried in a fixed priority order, most specific first:
/// per-row-date, quoted-keyword, bare-pair, keyword-line. The first
/// layout producing at least one record wins; the bare-pair layout is
/// permissive enough to swallow the others' matches, which is why the
/// order is load-bearing.
///
/// Stateless apart from the precompiled patterns, so one parser can be
/// shared across threads and calls.
pub struct FormatParser {
    per_row: PerRowDateExtractor,
    chain: Vec<Box<dyn RecordExtractor>>,
}

impl FormatParser {
    pub fn new() -> Self {
        Self {
            per_row: PerRowDateExtractor,
            chain: vec![
                Box::new(QuotedKeywordExtractor),
                Box::new(BarePairExtractor),
                Box::new(KeywordLineExtractor),
            ],
        }
    }

    /// Parse a raw request body into ordered records.
    ///
    /// Record order equals order of first appearance in the text.
    pub fn parse(&self, text: &str) -> Result<Vec<PoRecord>> {
        let text = text.trim();

        // Rows with inline dates win outright and bypass the global
        // control date entirely.
        let records = self.per_row.extract(text)?;
        if !records.is_empty() {
            debug!("matched per-row-date layout with {} records", records.len());
            return Ok(records);
        }

        let input_date = match CONTROL_DATE.captures(text) {
            Some(caps) => date_from_parts(&caps[1], &caps[2], &caps[3])?,
            None => return Err(ParseError::MissingControlDate),
        };

        for extractor in &self.chain {
            let records = extractor.extract(text, input_date);
            if !records.is_empty() {
                debug!(
                    "matched {} layout with {} records",
                    extractor.name(),
                    records.len()
                );
                return Ok(records);
            }
        }

        Err(ParseError::NoRecognizedPattern)
    }
}

impl Default for FormatParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_per_row_layout() {
        let parser = FormatParser::new();
        let records = parser
            .parse("123 45 01-JAN-24\n123 46 02-JAN-24\n123 47 03-JAN-24")
            .unwrap();

        assert_eq!(
            records,
            vec![
                PoRecord::new(123, 45, ymd(2024, 1, 1)),
                PoRecord::new(123, 46, ymd(2024, 1, 2)),
                PoRecord::new(123, 47, ymd(2024, 1, 3)),
            ]
        );
    }

    #[test]
    fn test_per_row_wins_over_control_date() {
        // The inline dates take precedence even when a control date
        // line is also present.
        let parser = FormatParser::new();
        let records = parser
            .parse("Controlled Date: 13-JUN-24\n123 45 01-JAN-24")
            .unwrap();

        assert_eq!(records, vec![PoRecord::new(123, 45, ymd(2024, 1, 1))]);
    }

    #[test]
    fn test_quoted_keyword_layout() {
        let parser = FormatParser::new();
        let records = parser
            .parse("Controlled Date: 13-JUN-24\npo_number='440468137' and po_line_number=11")
            .unwrap();

        assert_eq!(records, vec![PoRecord::new(440468137, 11, ymd(2024, 6, 13))]);
    }

    #[test]
    fn test_quoted_keyword_not_double_counted_as_bare_pair() {
        // A quoted-keyword line also contains digit runs; it must be
        // parsed exactly once, by the quoted-keyword extractor.
        let parser = FormatParser::new();
        let records = parser
            .parse("Controlled Date: 13-JUN-24\npo_number='440468137' and po_line_number=11")
            .unwrap();

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_bare_pair_fallback() {
        let parser = FormatParser::new();
        let records = parser
            .parse("Controlled Date: 13-JUN-24\n440468137 11")
            .unwrap();

        assert_eq!(records, vec![PoRecord::new(440468137, 11, ymd(2024, 6, 13))]);
    }

    #[test]
    fn test_keyword_line_fallback() {
        let parser = FormatParser::new();
        let records = parser
            .parse("Controlled Date: 13-JUN-24\nPO 440468137 line 11")
            .unwrap();

        assert_eq!(records, vec![PoRecord::new(440468137, 11, ymd(2024, 6, 13))]);
    }

    #[test]
    fn test_keyword_line_case_insensitive() {
        let parser = FormatParser::new();
        let records = parser
            .parse("controlled date: 13-jun-24\npo 440468137 LINE 11")
            .unwrap();

        assert_eq!(records, vec![PoRecord::new(440468137, 11, ymd(2024, 6, 13))]);
    }

    #[test]
    fn test_missing_control_date() {
        let parser = FormatParser::new();

        // No date token anywhere, even with a record-shaped pair: the
        // control date is checked before any non-per-row layout.
        assert_eq!(
            parser.parse("440468137 11").unwrap_err(),
            ParseError::MissingControlDate
        );
        assert_eq!(
            parser.parse("nothing useful here").unwrap_err(),
            ParseError::MissingControlDate
        );
    }

    #[test]
    fn test_no_recognized_pattern() {
        let parser = FormatParser::new();

        assert_eq!(
            parser.parse("Controlled Date: 13-JUN-24\nno records here").unwrap_err(),
            ParseError::NoRecognizedPattern
        );
    }

    #[test]
    fn test_malformed_control_date() {
        let parser = FormatParser::new();

        assert_eq!(
            parser
                .parse("Controlled Date: 13-XYZ-24\n440468137 11")
                .unwrap_err(),
            ParseError::MalformedDate {
                token: "13-XYZ-24".to_string()
            }
        );
    }

    #[test]
    fn test_century_rule() {
        let parser = FormatParser::new();
        let records = parser
            .parse("Controlled Date: 01-JAN-24\n1 2")
            .unwrap();

        assert_eq!(records[0].input_date, ymd(2024, 1, 1));
    }

    #[test]
    fn test_deterministic() {
        let parser = FormatParser::new();
        let text = "Controlled Date: 13-JUN-24\n440468137 11\n440468138 12";

        let a = serde_json::to_string(&parser.parse(text).unwrap()).unwrap();
        let b = serde_json::to_string(&parser.parse(text).unwrap()).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let parser = FormatParser::new();
        let records = parser
            .parse("  \n Controlled Date: 13-JUN-24\n440468137 11 \n ")
            .unwrap();

        assert_eq!(records.len(), 1);
    }
}
