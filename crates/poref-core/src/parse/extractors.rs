//! Layout-specific record extractors.
//!
//! One extractor per known input layout. Each is a pure function of the
//! text (plus the global control date where the layout needs one); the
//! fallback ordering between them lives in
//! [`FormatParser`](super::FormatParser), not here.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::record::PoRecord;

use super::date::date_from_parts;
use super::patterns::{BARE_PAIR, KEYWORD_LINE, PER_ROW_DATE, QUOTED_KEYWORD};

/// A record extractor for one layout that uses the global control date.
///
/// `extract` returns every match of the layout in order of appearance
/// in the text, each stamped with `input_date`.
pub trait RecordExtractor: Send + Sync {
    /// Short layout name used in logs.
    fn name(&self) -> &'static str;

    /// Extract all records of this layout, in order of appearance.
    fn extract(&self, text: &str, input_date: NaiveDate) -> Vec<PoRecord>;
}

fn parse_pair(po: &str, line: &str) -> Option<(u64, u64)> {
    // A digit run too long for u64 is not a PO number; drop the match.
    Some((po.parse().ok()?, line.parse().ok()?))
}

/// `<po> <line> DD-MMM-YY` rows, each carrying its own date.
///
/// Sits outside the [`RecordExtractor`] chain: it ignores the global
/// control date and can fail on a malformed inline date.
pub struct PerRowDateExtractor;

impl PerRowDateExtractor {
    pub fn extract(&self, text: &str) -> Result<Vec<PoRecord>> {
        let mut records = Vec::new();

        for caps in PER_ROW_DATE.captures_iter(text) {
            let Some((po_number, po_line_number)) = parse_pair(&caps[1], &caps[2]) else {
                continue;
            };
            let input_date = date_from_parts(&caps[3], &caps[4], &caps[5])?;
            records.push(PoRecord::new(po_number, po_line_number, input_date));
        }

        Ok(records)
    }
}

/// `po_number='<digits>' and po_line_number=<digits>` rows.
pub struct QuotedKeywordExtractor;

impl RecordExtractor for QuotedKeywordExtractor {
    fn name(&self) -> &'static str {
        "quoted-keyword"
    }

    fn extract(&self, text: &str, input_date: NaiveDate) -> Vec<PoRecord> {
        QUOTED_KEYWORD
            .captures_iter(text)
            .filter_map(|caps| {
                let (po_number, po_line_number) = parse_pair(&caps[1], &caps[2])?;
                Some(PoRecord::new(po_number, po_line_number, input_date))
            })
            .collect()
    }
}

/// Two whitespace-separated integer tokens, anywhere in the text.
///
/// The most permissive layout; it would swallow the quoted-keyword and
/// per-row matches too, so the dispatcher only reaches it after those
/// produce nothing.
pub struct BarePairExtractor;

impl RecordExtractor for BarePairExtractor {
    fn name(&self) -> &'static str {
        "bare-pair"
    }

    fn extract(&self, text: &str, input_date: NaiveDate) -> Vec<PoRecord> {
        BARE_PAIR
            .captures_iter(text)
            .filter_map(|caps| {
                let (po_number, po_line_number) = parse_pair(&caps[1], &caps[2])?;
                Some(PoRecord::new(po_number, po_line_number, input_date))
            })
            .collect()
    }
}

/// `PO <digits> line <digits>` rows.
pub struct KeywordLineExtractor;

impl RecordExtractor for KeywordLineExtractor {
    fn name(&self) -> &'static str {
        "keyword-line"
    }

    fn extract(&self, text: &str, input_date: NaiveDate) -> Vec<PoRecord> {
        KEYWORD_LINE
            .captures_iter(text)
            .filter_map(|caps| {
                let (po_number, po_line_number) = parse_pair(&caps[1], &caps[2])?;
                Some(PoRecord::new(po_number, po_line_number, input_date))
            })
            .collect()
    }
}
