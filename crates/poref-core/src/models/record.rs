//! Structured purchase-order reference records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One extracted purchase-order reference.
///
/// Serializes with the upstream column names and the
/// `YYYY/MM/DD 00:00:00` date shape the downstream loader expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoRecord {
    /// Purchase-order number.
    #[serde(rename = "PO_NUMBER")]
    pub po_number: u64,

    /// Line number within the purchase order.
    #[serde(rename = "PO_LINE_NUMBER")]
    pub po_line_number: u64,

    /// Date the reference applies to: the row's own date in the
    /// per-row layout, the global control date everywhere else.
    #[serde(rename = "INPUT_DATE", with = "input_date_format")]
    pub input_date: NaiveDate,
}

impl PoRecord {
    pub fn new(po_number: u64, po_line_number: u64, input_date: NaiveDate) -> Self {
        Self {
            po_number,
            po_line_number,
            input_date,
        }
    }
}

/// Serde adapter for the `YYYY/MM/DD 00:00:00` date shape.
///
/// The time part is always midnight; the downstream store keeps a
/// datetime column, so the serialized form carries it anyway.
pub mod input_date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y/%m/%d 00:00:00";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
